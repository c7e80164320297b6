//! Rule to forbid non-null assertions (`value!`) in TypeScript.

use script_lint_core::utils::walk;
use script_lint_core::{FileContext, Rule, Severity, Suggestion, Violation};

/// Rule code for no-non-null-assertion.
pub const CODE: &str = "TS002";

/// Rule name for no-non-null-assertion.
pub const NAME: &str = "no-non-null-assertion";

/// Forbids the postfix `!` operator.
#[derive(Debug, Clone, Default)]
pub struct NoNonNullAssertion;

impl NoNonNullAssertion {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoNonNullAssertion {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids non-null assertions with the `!` postfix operator"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &FileContext, tree: &tree_sitter::Tree) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(tree.root_node(), |node| {
            if node.kind() == "non_null_expression" {
                violations.push(
                    ctx.violation(self, &node, "Forbidden non-null assertion")
                        .with_suggestion(Suggestion::new(
                            "Check for `null`/`undefined` or use optional chaining (`?.`)",
                        )),
                );
            }
        });

        violations
    }
}
