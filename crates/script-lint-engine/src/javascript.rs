//! JavaScript lint strategy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use ignore::gitignore::Gitignore;
use script_lint_core::{Config, RuleBox};
use tracing::info;

use crate::error::EngineError;
use crate::strategy::{
    check_grammar, enabled_rules, load_ignore_file, matches_extension, LintStrategy, StrategyKind,
};

/// Extensions used when `[javascript] extensions` is not set.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".mjs", ".cjs", ".jsx"];

/// Lints JavaScript (including JSX) with the tree-sitter JavaScript grammar.
pub struct JavascriptStrategy {
    root: PathBuf,
    config: Arc<Config>,
    language: tree_sitter::Language,
    extensions: Vec<String>,
    ignore: Option<Gitignore>,
    rules: Vec<RuleBox>,
}

impl JavascriptStrategy {
    /// Creates an uninitialized strategy reading `[javascript]` from `config`.
    #[must_use]
    pub fn new(root: PathBuf, config: Arc<Config>) -> Self {
        Self {
            root,
            config,
            language: tree_sitter_javascript::LANGUAGE.into(),
            extensions: Vec::new(),
            ignore: None,
            rules: Vec::new(),
        }
    }
}

#[async_trait]
impl LintStrategy for JavascriptStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::JavaScript
    }

    async fn init(&mut self) -> Result<(), EngineError> {
        let config = Arc::clone(&self.config);
        let section = &config.javascript;
        section.validate("javascript")?;
        check_grammar(&self.language)?;

        self.ignore = match &section.ignore_file {
            Some(file) => Some(load_ignore_file(&self.root.join(file)).await?),
            None => None,
        };
        self.extensions = section.extensions_or(DEFAULT_EXTENSIONS);
        self.rules = enabled_rules(script_lint_rules::javascript_rules(), &config);

        info!(
            "JavaScript strategy ready: {} rule(s), extensions {:?}",
            self.rules.len(),
            self.extensions
        );
        Ok(())
    }

    fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn exclude_patterns(&self) -> &[String] {
        &[]
    }

    fn ignore_matcher(&self) -> Option<&Gitignore> {
        self.ignore.as_ref()
    }

    fn language_for(&self, path: &Path) -> Option<tree_sitter::Language> {
        matches_extension(path, &self.extensions).then(|| self.language.clone())
    }

    fn rules(&self) -> &[RuleBox] {
        &self.rules
    }
}
