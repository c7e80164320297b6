//! Rule to forbid `var` declarations.
//!
//! # Rationale
//!
//! `var` is function-scoped and hoisted, which hides use-before-assignment
//! bugs. `let` and `const` are block-scoped.
//!
//! # Detected Patterns
//!
//! - `var x = 1;`
//! - `for (var i = 0; ...)`

use script_lint_core::utils::{child_of_kind, walk};
use script_lint_core::{FileContext, Replacement, Rule, Severity, Suggestion, Violation};

/// Rule code for no-var.
pub const CODE: &str = "JS001";

/// Rule name for no-var.
pub const NAME: &str = "no-var";

/// Forbids `var` declarations.
#[derive(Debug, Clone)]
pub struct NoVar {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoVar {
    fn default() -> Self {
        Self::new()
    }
}

impl NoVar {
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

impl Rule for NoVar {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires `let` or `const` instead of `var`"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, tree: &tree_sitter::Tree) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(tree.root_node(), |node| {
            if node.kind() != "variable_declaration" {
                return;
            }
            let Some(keyword) = child_of_kind(&node, "var") else {
                return;
            };

            let fix = Replacement::new(ctx.location(&keyword), "let");
            violations.push(
                ctx.violation(self, &node, "Unexpected `var`, use `let` or `const` instead")
                    .with_suggestion(Suggestion::with_fix("Replace `var` with `let`", fix)),
            );
        });

        violations
    }
}
