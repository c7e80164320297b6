//! Shared engine base: consumes an initialized strategy and lints with it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use ignore::gitignore::Gitignore;
use script_lint_core::utils::{check_allow, is_excluded};
use script_lint_core::{Config, FileContext, LintResult, Severity, Violation};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::strategy::{matches_extension, LintStrategy, StrategyKind};

/// The half of an engine that owns lint contents.
///
/// An engine hands each freshly initialized strategy to
/// [`EngineBase::initialize_contents`]; the base takes ownership of it.
#[async_trait]
pub trait EngineBase: Send {
    /// Builds the lint contents from a ready strategy.
    async fn initialize_contents(
        &mut self,
        strategy: Box<dyn LintStrategy>,
    ) -> Result<(), EngineError>;
}

/// A rule as reported by [`LintBase::catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    /// Rule code, e.g. `JS001`.
    pub code: &'static str,
    /// Rule name, e.g. `no-var`.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Effective severity after config overrides.
    pub severity: Severity,
    /// Language of the strategy that loaded the rule.
    pub language: StrategyKind,
}

struct Contents {
    strategy: Box<dyn LintStrategy>,
    targets: Vec<PathBuf>,
}

/// File-system backed engine base.
///
/// Discovers target files under a project root and lints them with the
/// rules of the strategy it was given.
pub struct LintBase {
    root: PathBuf,
    config: Arc<Config>,
    contents: Option<Contents>,
}

impl LintBase {
    /// Creates an empty base for `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is relative and the current directory
    /// cannot be read.
    pub fn new(root: impl Into<PathBuf>, config: Arc<Config>) -> Result<Self, EngineError> {
        let root = root.into();
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(root)
        };
        Ok(Self {
            root,
            config,
            contents: None,
        })
    }

    /// Absolute project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Shared configuration.
    #[must_use]
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Whether contents have been initialized.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.contents.is_some()
    }

    fn contents(&self) -> Result<&Contents, EngineError> {
        self.contents.as_ref().ok_or(EngineError::NotInitialized)
    }

    /// Language name of the loaded strategy.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInitialized`] before contents exist.
    pub fn name(&self) -> Result<&'static str, EngineError> {
        Ok(self.contents()?.strategy.kind().name())
    }

    /// Enabled rules with their effective severities.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInitialized`] before contents exist.
    pub fn catalog(&self) -> Result<Vec<RuleDescriptor>, EngineError> {
        let strategy = &self.contents()?.strategy;
        Ok(strategy
            .rules()
            .iter()
            .map(|rule| RuleDescriptor {
                code: rule.code(),
                name: rule.name(),
                description: rule.description(),
                severity: self
                    .config
                    .rule_severity(rule.name())
                    .unwrap_or_else(|| rule.default_severity()),
                language: strategy.kind(),
            })
            .collect())
    }

    /// Glob patterns describing the handled files, one per extension.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInitialized`] before contents exist.
    pub fn target_patterns(&self) -> Result<Vec<String>, EngineError> {
        Ok(self
            .contents()?
            .strategy
            .extensions()
            .iter()
            .map(|ext| format!("**/*{ext}"))
            .collect())
    }

    /// Discovered target files, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInitialized`] before contents exist.
    pub fn targets(&self) -> Result<&[PathBuf], EngineError> {
        Ok(&self.contents()?.targets)
    }

    /// Lints every target file.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, or fails to parse while
    /// `analyzer.fail_on_parse_error` is set.
    pub async fn run(&self) -> Result<LintResult, EngineError> {
        let contents = self.contents()?;
        info!(
            "Linting {} {} file(s) under {}",
            contents.targets.len(),
            contents.strategy.kind(),
            self.root.display()
        );

        let mut result = LintResult::new();
        for path in &contents.targets {
            match self.lint_file(path).await {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(EngineError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.config.analyzer.fail_on_parse_error {
                        return Err(EngineError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        result.sort();
        info!(
            "Lint complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );
        Ok(result)
    }

    async fn lint_file(&self, path: &Path) -> Result<Vec<Violation>, EngineError> {
        debug!("Linting: {}", path.display());
        let relative = path.strip_prefix(&self.root).unwrap_or(path);

        let source = match tokio::fs::read_to_string(path).await {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Err(EngineError::Parse {
                    path: relative.to_path_buf(),
                    message: "file is not valid UTF-8".to_string(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        self.lint_source(relative, &source)
    }

    /// Lints in-memory `source` as if it were the file at `path`.
    ///
    /// `path` is reported in violations as given and selects the grammar.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotInitialized`] before contents exist and
    /// [`EngineError::Parse`] when no grammar handles `path`.
    pub fn lint_source(&self, path: &Path, source: &str) -> Result<Vec<Violation>, EngineError> {
        let strategy = &self.contents()?.strategy;
        let parse_error = |message: &str| EngineError::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        };

        let language = strategy
            .language_for(path)
            .ok_or_else(|| parse_error("no grammar for this file type"))?;
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&language)?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| parse_error("parser produced no tree"))?;

        let ctx = FileContext::new(path, source);
        let mut violations = Vec::new();
        for rule in strategy.rules() {
            let severity = self.config.rule_severity(rule.name());
            violations.extend(
                rule.check(&ctx, &tree)
                    .into_iter()
                    .filter(|v| !check_allow(source, v.location.line, rule.name()).is_allowed())
                    .map(|mut v| {
                        if let Some(severity) = severity {
                            v.severity = severity;
                        }
                        v
                    }),
            );
        }
        Ok(violations)
    }
}

#[async_trait]
impl EngineBase for LintBase {
    async fn initialize_contents(
        &mut self,
        strategy: Box<dyn LintStrategy>,
    ) -> Result<(), EngineError> {
        let root = self.root.clone();
        let extensions = strategy.extensions().to_vec();
        let mut exclude = self.config.analyzer.exclude.clone();
        exclude.extend_from_slice(strategy.exclude_patterns());
        let ignore_file = strategy.ignore_matcher().cloned();
        let respect_gitignore = self.config.analyzer.respect_gitignore;

        let targets = tokio::task::spawn_blocking(move || {
            discover_targets(
                &root,
                &extensions,
                &exclude,
                ignore_file.as_ref(),
                respect_gitignore,
            )
        })
        .await??;

        info!(
            "Found {} {} target(s), {} rule(s) enabled",
            targets.len(),
            strategy.kind(),
            strategy.rules().len()
        );
        self.contents = Some(Contents { strategy, targets });
        Ok(())
    }
}

fn discover_targets(
    root: &Path,
    extensions: &[String],
    exclude: &[String],
    ignore_file: Option<&Gitignore>,
    respect_gitignore: bool,
) -> Result<Vec<PathBuf>, EngineError> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(respect_gitignore)
        .require_git(false);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if !matches_extension(path, extensions) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if is_excluded(relative, exclude) || is_ignored(ignore_file, path) {
            debug!("Excluding: {}", relative.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Whether the ignore file matches `path` or one of its parent directories.
fn is_ignored(ignore_file: Option<&Gitignore>, path: &Path) -> bool {
    ignore_file.is_some_and(|gi| {
        // Patterns only apply below the ignore file's directory.
        path.starts_with(gi.path()) && gi.matched_path_or_any_parents(path, false).is_ignore()
    })
}
