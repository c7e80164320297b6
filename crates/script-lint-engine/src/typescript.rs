//! TypeScript lint strategy.
//!
//! Uses the TypeScript grammar for `.ts`/`.mts`/`.cts` and the TSX grammar
//! for `.tsx`. The project's `tsconfig.json` contributes its `exclude`
//! list to target discovery. It is read as JSONC, the dialect `tsc --init`
//! writes, so comments and trailing commas are accepted.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use ignore::gitignore::Gitignore;
use script_lint_core::{Config, ConfigError, RuleBox};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::strategy::{
    check_grammar, enabled_rules, load_ignore_file, matches_extension, LintStrategy, StrategyKind,
};

/// Extensions used when `[typescript] extensions` is not set.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".mts", ".cts", ".tsx"];

const DEFAULT_TSCONFIG: &str = "tsconfig.json";

/// The subset of `tsconfig.json` read by the strategy.
#[derive(Debug, Default, Deserialize)]
struct TsConfig {
    #[serde(default)]
    exclude: Vec<String>,
}

/// Lints TypeScript and TSX sources.
pub struct TypescriptStrategy {
    root: PathBuf,
    config: Arc<Config>,
    typescript: tree_sitter::Language,
    tsx: tree_sitter::Language,
    extensions: Vec<String>,
    exclude: Vec<String>,
    ignore: Option<Gitignore>,
    rules: Vec<RuleBox>,
}

impl TypescriptStrategy {
    /// Creates an uninitialized strategy reading `[typescript]` from `config`.
    #[must_use]
    pub fn new(root: PathBuf, config: Arc<Config>) -> Self {
        Self {
            root,
            config,
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
            extensions: Vec::new(),
            exclude: Vec::new(),
            ignore: None,
            rules: Vec::new(),
        }
    }

    /// Reads `exclude` from the project's tsconfig, as root-relative patterns.
    ///
    /// A missing or unparseable default `tsconfig.json` is skipped; the same
    /// problems with a file named in `[typescript] tsconfig` are errors.
    async fn load_tsconfig_excludes(&self) -> Result<Vec<String>, EngineError> {
        let configured = self.config.typescript.tsconfig.as_deref();
        let path = self
            .root
            .join(configured.unwrap_or(Path::new(DEFAULT_TSCONFIG)));

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if configured.is_none() && e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No {} found, skipping", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(ConfigError::Io { path, source: e }.into()),
        };

        let tsconfig = match parse_tsconfig(&content) {
            Ok(tsconfig) => tsconfig,
            Err(e) if configured.is_none() => {
                warn!("Skipping unparseable {}: {}", path.display(), e);
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(ConfigError::Parse {
                    message: format!("{}: {e}", path.display()),
                }
                .into())
            }
        };

        // Entries are relative to the tsconfig's own directory.
        let base = path
            .parent()
            .and_then(|dir| dir.strip_prefix(&self.root).ok())
            .unwrap_or(Path::new(""));
        let exclude: Vec<String> = tsconfig
            .exclude
            .iter()
            .map(|pattern| rebase_pattern(base, pattern))
            .collect();
        debug!(
            "Loaded {} exclude pattern(s) from {}",
            exclude.len(),
            path.display()
        );
        Ok(exclude)
    }
}

/// Parses tsconfig as JSONC: comments and trailing commas are allowed.
fn parse_tsconfig(content: &str) -> Result<TsConfig, json5::Error> {
    json5::from_str(content)
}

/// Prefixes a tsconfig-relative `pattern` with the tsconfig's directory.
fn rebase_pattern(base: &Path, pattern: &str) -> String {
    let pattern = pattern.trim_start_matches("./");
    if base.as_os_str().is_empty() {
        return pattern.to_string();
    }
    let base = base.to_string_lossy().replace('\\', "/");
    format!("{}/{pattern}", base.trim_end_matches('/'))
}

#[async_trait]
impl LintStrategy for TypescriptStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TypeScript
    }

    async fn init(&mut self) -> Result<(), EngineError> {
        let config = Arc::clone(&self.config);
        let section = &config.typescript;
        section.validate("typescript")?;
        check_grammar(&self.typescript)?;
        check_grammar(&self.tsx)?;

        self.exclude = self.load_tsconfig_excludes().await?;
        self.ignore = match &section.ignore_file {
            Some(file) => Some(load_ignore_file(&self.root.join(file)).await?),
            None => None,
        };
        self.extensions = section.extensions_or(DEFAULT_EXTENSIONS);
        self.rules = enabled_rules(script_lint_rules::typescript_rules(), &config);

        info!(
            "TypeScript strategy ready: {} rule(s), extensions {:?}",
            self.rules.len(),
            self.extensions
        );
        Ok(())
    }

    fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn exclude_patterns(&self) -> &[String] {
        &self.exclude
    }

    fn ignore_matcher(&self) -> Option<&Gitignore> {
        self.ignore.as_ref()
    }

    fn language_for(&self, path: &Path) -> Option<tree_sitter::Language> {
        if !matches_extension(path, &self.extensions) {
            return None;
        }
        let is_tsx = path.extension().and_then(|e| e.to_str()) == Some("tsx");
        Some(if is_tsx {
            self.tsx.clone()
        } else {
            self.typescript.clone()
        })
    }

    fn rules(&self) -> &[RuleBox] {
        &self.rules
    }
}
