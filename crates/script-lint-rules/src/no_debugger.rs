//! Rule to forbid `debugger` statements.

use script_lint_core::utils::walk;
use script_lint_core::{FileContext, Rule, Severity, Suggestion, Violation};

/// Rule code for no-debugger.
pub const CODE: &str = "JS002";

/// Rule name for no-debugger.
pub const NAME: &str = "no-debugger";

/// Forbids `debugger` statements.
#[derive(Debug, Clone, Default)]
pub struct NoDebugger;

impl NoDebugger {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoDebugger {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids `debugger` statements"
    }

    fn check(&self, ctx: &FileContext, tree: &tree_sitter::Tree) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(tree.root_node(), |node| {
            if node.kind() == "debugger_statement" {
                violations.push(
                    ctx.violation(self, &node, "Unexpected `debugger` statement")
                        .with_suggestion(Suggestion::new("Remove the statement before committing")),
                );
            }
        });

        violations
    }
}
