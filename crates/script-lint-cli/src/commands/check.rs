//! Check command implementation.

use anyhow::{Context, Result};
use script_lint_core::LintResult;
use script_lint_engine::StrategyKind;

use crate::settings::Settings;
use crate::OutputFormat;

/// Runs the check command.
///
/// Returns `false` when violations reach the configured `fail_on` severity.
pub async fn run(
    settings: Settings,
    format: OutputFormat,
    language: Option<StrategyKind>,
) -> Result<bool> {
    let fail_on = settings.config().fail_on();

    let engines = super::init_engines(settings, language).await?;
    let Some(root) = engines.first().map(|e| e.base().root().to_path_buf()) else {
        tracing::warn!("No languages enabled, nothing to check");
        return Ok(true);
    };

    let mut result = LintResult::new();
    for engine in &engines {
        let partial = engine
            .base()
            .run()
            .await
            .with_context(|| format!("Linting {} sources failed", engine.kind()))?;
        result.extend(partial);
    }
    result.sort();

    super::output::print(&result, format, &root)?;

    Ok(!result.has_violations_at(fail_on))
}
