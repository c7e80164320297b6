//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use script_lint_engine::{Engine, LintBase, StrategyKind};
use std::sync::Arc;

use crate::settings::Settings;

/// Builds and initializes one engine per selected language, in order.
async fn init_engines(settings: Settings, language: Option<StrategyKind>) -> Result<Vec<Engine>> {
    let kinds = settings.languages(language);
    let root = settings.root().to_path_buf();
    let config = Arc::new(settings.into_config());

    let mut engines = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let base = LintBase::new(&root, Arc::clone(&config))
            .with_context(|| format!("Failed to prepare {kind} engine"))?;
        let mut engine = Engine::new(kind, base);
        engine
            .init()
            .await
            .with_context(|| format!("Failed to initialize {kind} engine"))?;
        engines.push(engine);
    }
    Ok(engines)
}
