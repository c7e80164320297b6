//! Rule to forbid `console` calls.
//!
//! # Configuration
//!
//! - `allow_methods`: console methods that stay allowed (e.g. `warn`, `error`)
//! - `allow_in_tests`: skip test files (default: `true`)

use script_lint_core::utils::walk;
use script_lint_core::{FileContext, Rule, Severity, Violation};

/// Rule code for no-console.
pub const CODE: &str = "JS004";

/// Rule name for no-console.
pub const NAME: &str = "no-console";

/// Forbids `console.*(...)` calls.
#[derive(Debug, Clone)]
pub struct NoConsole {
    /// Methods that remain allowed.
    pub allow_methods: Vec<String>,
    /// Whether test files are skipped.
    pub allow_in_tests: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl NoConsole {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_methods: Vec::new(),
            allow_in_tests: true,
            severity: Severity::Warning,
        }
    }

    /// Adds methods to allow.
    #[must_use]
    pub fn allow_methods(mut self, methods: &[&str]) -> Self {
        self.allow_methods
            .extend(methods.iter().map(|s| (*s).to_string()));
        self
    }

    /// Sets whether test files are skipped.
    #[must_use]
    pub fn allow_in_tests(mut self, allow: bool) -> Self {
        self.allow_in_tests = allow;
        self
    }
}

impl Rule for NoConsole {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids `console` calls in shipped code"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, tree: &tree_sitter::Tree) -> Vec<Violation> {
        if self.allow_in_tests && ctx.is_test {
            return Vec::new();
        }

        let mut violations = Vec::new();

        walk(tree.root_node(), |node| {
            if node.kind() != "call_expression" {
                return;
            }
            let Some(callee) = node.child_by_field_name("function") else {
                return;
            };
            if callee.kind() != "member_expression" {
                return;
            }
            let (Some(object), Some(property)) = (
                callee.child_by_field_name("object"),
                callee.child_by_field_name("property"),
            ) else {
                return;
            };
            if object.kind() != "identifier" || ctx.text(&object) != "console" {
                return;
            }

            let method = ctx.text(&property);
            if self.allow_methods.iter().any(|m| m == method) {
                return;
            }

            violations.push(ctx.violation(
                self,
                &node,
                format!("Unexpected console statement `console.{method}`"),
            ));
        });

        violations
    }
}
