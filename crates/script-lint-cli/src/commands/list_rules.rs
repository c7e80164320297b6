//! List rules command implementation.

use anyhow::Result;
use script_lint_engine::StrategyKind;

use crate::settings::{Origin, Settings};

/// Runs the list-rules command.
pub async fn run(settings: Settings, language: Option<StrategyKind>) -> Result<()> {
    let source = config_label(&settings);
    let engines = super::init_engines(settings, language).await?;

    for engine in &engines {
        let base = engine.base();
        println!("{} rules ({}):\n", base.name()?, base.target_patterns()?.join(", "));
        println!("{:<8} {:<24} {:<8} Description", "Code", "Name", "Severity");
        println!("{}", "-".repeat(80));

        for rule in base.catalog()? {
            println!(
                "{:<8} {:<24} {:<8} {}",
                rule.code, rule.name, rule.severity, rule.description
            );
        }
        println!();
    }

    println!("Config: {source}");
    println!("Disable a rule or change its severity in script-lint.toml, e.g.:");
    println!("  [rules.no-console]");
    println!("  enabled = false");
    Ok(())
}

/// Where the rule settings above came from.
fn config_label(settings: &Settings) -> String {
    match (settings.origin(), settings.file()) {
        (Origin::Global, Some(file)) => format!("{} (global)", file.display()),
        (_, Some(file)) => file.display().to_string(),
        (_, None) => "built-in defaults".to_string(),
    }
}
