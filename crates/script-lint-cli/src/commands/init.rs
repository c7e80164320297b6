//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# script-lint configuration

# Lowest severity that makes `script-lint check` exit non-zero
fail_on = "error"

[analyzer]
# Root directory to analyze, relative to the checked path
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Respect .gitignore files
respect_gitignore = true

# Abort when a file cannot be read as source text
fail_on_parse_error = false

[javascript]
enabled = true
# extensions = [".js", ".mjs", ".cjs", ".jsx"]
# ignore_file = ".eslintignore"

[typescript]
enabled = true
# extensions = [".ts", ".mts", ".cts", ".tsx"]
# tsconfig = "tsconfig.json"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.no-debugger]
enabled = true

[rules.no-console]
enabled = true
# severity = "error"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("script-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created script-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit script-lint.toml to configure rules");
    println!("  2. Run: script-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use script_lint_core::{Config, Severity};

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.javascript.enabled);
        assert!(config.typescript.enabled);
        assert!(config.is_rule_enabled("no-console"));
        assert_eq!(config.analyzer.exclude.len(), 2);
    }
}
