//! Language strategies: how to lint one source language.
//!
//! [`LintStrategy`] is the extension point for adding a language. An engine
//! creates a strategy through a [`StrategyFactory`], awaits
//! [`LintStrategy::init`], then hands the ready strategy to its base.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use script_lint_core::{Config, ConfigError, RuleBox};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::EngineError;
use crate::javascript::JavascriptStrategy;
use crate::typescript::TypescriptStrategy;

/// The closed set of supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// JavaScript (`.js`, `.mjs`, `.cjs`, `.jsx`).
    JavaScript,
    /// TypeScript (`.ts`, `.mts`, `.cts`, `.tsx`).
    TypeScript,
}

impl StrategyKind {
    /// Every kind, in catalog order.
    pub const ALL: [Self; 2] = [Self::JavaScript, Self::TypeScript];

    /// Lowercase language name, also the config section name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
        }
    }

    /// Whether the language is enabled in `config`.
    #[must_use]
    pub fn is_enabled(self, config: &Config) -> bool {
        match self {
            Self::JavaScript => config.javascript.enabled,
            Self::TypeScript => config.typescript.enabled,
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "js" | "javascript" => Ok(Self::JavaScript),
            "ts" | "typescript" => Ok(Self::TypeScript),
            other => Err(format!(
                "unknown language `{other}`, expected: javascript, typescript"
            )),
        }
    }
}

/// Language-specific lint configuration and behavior.
///
/// Accessors other than [`LintStrategy::kind`] reflect the state loaded by
/// [`LintStrategy::init`] and are empty before it completes.
#[async_trait]
pub trait LintStrategy: Send + Sync {
    /// Which language this strategy lints.
    fn kind(&self) -> StrategyKind;

    /// Loads configuration, grammars and the rule set.
    async fn init(&mut self) -> Result<(), EngineError>;

    /// File extensions handled, each with a leading dot.
    fn extensions(&self) -> &[String];

    /// Extra exclude patterns contributed by the language's own config files.
    fn exclude_patterns(&self) -> &[String];

    /// Gitignore-style matcher loaded from the configured ignore file.
    fn ignore_matcher(&self) -> Option<&Gitignore> {
        None
    }

    /// Grammar for `path`, or `None` if the strategy does not handle it.
    fn language_for(&self, path: &Path) -> Option<tree_sitter::Language>;

    /// Enabled rules.
    fn rules(&self) -> &[RuleBox];
}

/// Creates a fresh, uninitialized strategy for a [`StrategyKind`].
pub trait StrategyFactory: Send + Sync {
    /// Builds a new strategy instance. Never returns a shared instance.
    fn create(&self, kind: StrategyKind) -> Box<dyn LintStrategy>;
}

/// Factory for the built-in JavaScript and TypeScript strategies.
#[derive(Debug, Clone)]
pub struct DefaultStrategyFactory {
    root: PathBuf,
    config: Arc<Config>,
}

impl DefaultStrategyFactory {
    /// Creates a factory whose strategies resolve paths against `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: Arc<Config>) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }
}

impl StrategyFactory for DefaultStrategyFactory {
    fn create(&self, kind: StrategyKind) -> Box<dyn LintStrategy> {
        match kind {
            StrategyKind::JavaScript => Box::new(JavascriptStrategy::new(
                self.root.clone(),
                Arc::clone(&self.config),
            )),
            StrategyKind::TypeScript => Box::new(TypescriptStrategy::new(
                self.root.clone(),
                Arc::clone(&self.config),
            )),
        }
    }
}

/// Whether the file name of `path` ends with one of `extensions`.
#[must_use]
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Loads `language` into a parser to confirm ABI compatibility.
pub(crate) fn check_grammar(language: &tree_sitter::Language) -> Result<(), EngineError> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(language)?;
    Ok(())
}

/// Loads an ignore file with gitignore semantics, rooted at its directory.
///
/// Lines that fail to parse are logged and skipped; the rest still apply.
pub(crate) async fn load_ignore_file(path: &Path) -> Result<Gitignore, EngineError> {
    tokio::fs::metadata(path)
        .await
        .map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut builder = GitignoreBuilder::new(path.parent().unwrap_or(Path::new("")));
    if let Some(err) = builder.add(path) {
        warn!("Ignoring bad pattern(s) in {}: {}", path.display(), err);
    }
    let matcher = builder.build()?;
    debug!(
        "Loaded {} ignore pattern(s) from {}",
        matcher.num_ignores() + matcher.num_whitelists(),
        path.display()
    );
    Ok(matcher)
}

/// Drops rules disabled in `config`.
pub(crate) fn enabled_rules(rules: Vec<RuleBox>, config: &Config) -> Vec<RuleBox> {
    rules
        .into_iter()
        .filter(|rule| {
            let enabled = config.is_rule_enabled(rule.name());
            if !enabled {
                debug!("Skipping disabled rule: {}", rule.name());
            }
            enabled
        })
        .collect()
}

/// `[rules.<name>]` entries naming no built-in rule, sorted.
#[must_use]
pub fn unknown_rule_names(config: &Config) -> Vec<&str> {
    // The TypeScript set includes every JavaScript rule.
    let known: Vec<&str> = script_lint_rules::typescript_rules()
        .iter()
        .map(|rule| rule.name())
        .collect();
    let mut unknown: Vec<&str> = config
        .rules
        .keys()
        .map(String::as_str)
        .filter(|name| !known.contains(name))
        .collect();
    unknown.sort_unstable();
    unknown
}
