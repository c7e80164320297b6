//! Shared output formatting for lint results.

use anyhow::{Context, Result};
use miette::GraphicalReportHandler;
use script_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is the directory violation paths are relative to.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Rich => return print_rich(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{}", compact_line(violation));
    }
}

fn compact_line(violation: &Violation) -> String {
    format!(
        "{}:{}:{}: {} [{}] {}",
        violation.location.file.display(),
        violation.location.line,
        violation.location.column,
        violation.severity,
        violation.code,
        violation.message,
    )
}

fn print_rich(result: &LintResult, root: &Path) -> Result<()> {
    let handler = GraphicalReportHandler::new();

    for violation in &result.violations {
        let path = root.join(&violation.location.file);
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to re-read {}", path.display()))?;
        let diagnostic = ViolationDiagnostic::new(violation, source);

        let mut rendered = String::new();
        handler
            .render_report(&mut rendered, &diagnostic)
            .context("Failed to render diagnostic")?;
        println!("{rendered}");
    }

    print_summary(result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use script_lint_core::Location;
    use std::path::PathBuf;

    #[test]
    fn compact_line_format() {
        let violation = Violation::new(
            "JS003",
            "eqeqeq",
            Severity::Error,
            Location::new(PathBuf::from("src/app.js"), 2, 11),
            "Expected `===` and instead saw `==`",
        );
        insta::assert_snapshot!(
            compact_line(&violation),
            @"src/app.js:2:11: error [JS003] Expected `===` and instead saw `==`"
        );
    }

    #[test]
    fn rich_output_reads_source_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.js"), "debugger;\n").unwrap();

        let mut result = LintResult::new();
        result.violations.push(Violation::new(
            "JS002",
            "no-debugger",
            Severity::Error,
            Location::new(PathBuf::from("a.js"), 1, 1).with_span(0, 9),
            "Unexpected `debugger` statement",
        ));

        assert!(print(&result, OutputFormat::Rich, dir.path()).is_ok());
        assert!(print(&result, OutputFormat::Rich, Path::new("/nonexistent")).is_err());
    }
}
