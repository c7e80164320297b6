//! Rule to forbid the `any` type in TypeScript.

use script_lint_core::utils::walk;
use script_lint_core::{FileContext, Rule, Severity, Suggestion, Violation};

/// Rule code for no-explicit-any.
pub const CODE: &str = "TS001";

/// Rule name for no-explicit-any.
pub const NAME: &str = "no-explicit-any";

/// Forbids explicit `any` annotations.
#[derive(Debug, Clone)]
pub struct NoExplicitAny {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoExplicitAny {
    fn default() -> Self {
        Self::new()
    }
}

impl NoExplicitAny {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoExplicitAny {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids the `any` type"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, tree: &tree_sitter::Tree) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(tree.root_node(), |node| {
            if node.kind() == "predefined_type" && ctx.text(&node) == "any" {
                violations.push(
                    ctx.violation(self, &node, "Unexpected `any`, specify a different type")
                        .with_suggestion(Suggestion::new(
                            "Use `unknown` and narrow the value where it is used",
                        )),
                );
            }
        });

        violations
    }
}
