//! Rule to require strict equality operators.
//!
//! # Rationale
//!
//! `==` and `!=` apply type coercion (`"0" == false` is `true`).
//!
//! # Configuration
//!
//! - `allow_null`: permit `x == null` / `x != null`, the idiomatic
//!   null-or-undefined check (default: `false`)

use script_lint_core::utils::walk;
use script_lint_core::{FileContext, Replacement, Rule, Severity, Suggestion, Violation};

/// Rule code for eqeqeq.
pub const CODE: &str = "JS003";

/// Rule name for eqeqeq.
pub const NAME: &str = "eqeqeq";

/// Requires `===` and `!==`.
#[derive(Debug, Clone)]
pub struct Eqeqeq {
    /// Permit loose comparison against a `null` literal.
    pub allow_null: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for Eqeqeq {
    fn default() -> Self {
        Self::new()
    }
}

impl Eqeqeq {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allow_null: false,
            severity: Severity::Error,
        }
    }

    /// Sets whether comparisons with `null` are allowed.
    #[must_use]
    pub fn allow_null(mut self, allow: bool) -> Self {
        self.allow_null = allow;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn compares_null(node: &tree_sitter::Node<'_>) -> bool {
        ["left", "right"].iter().any(|field| {
            node.child_by_field_name(field)
                .is_some_and(|operand| operand.kind() == "null")
        })
    }
}

impl Rule for Eqeqeq {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires `===` and `!==` instead of `==` and `!=`"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, tree: &tree_sitter::Tree) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(tree.root_node(), |node| {
            if node.kind() != "binary_expression" {
                return;
            }
            let Some(operator) = node.child_by_field_name("operator") else {
                return;
            };
            let strict = match operator.kind() {
                "==" => "===",
                "!=" => "!==",
                _ => return,
            };
            if self.allow_null && Self::compares_null(&node) {
                return;
            }

            let fix = Replacement::new(ctx.location(&operator), strict);
            violations.push(
                ctx.violation(
                    self,
                    &operator,
                    format!("Expected `{strict}` and instead saw `{}`", operator.kind()),
                )
                .with_suggestion(Suggestion::with_fix(format!("Use `{strict}`"), fix)),
            );
        });

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check_js, check_ts};

    #[test]
    fn test_detects_loose_equality() {
        let violations = check_js(&Eqeqeq::new(), "if (a == b) {}\nif (a != b) {}\n");
        assert_eq!(violations.len(), 2);
        assert!(violations[0].message.contains("`===`"));
        assert!(violations[1].message.contains("`!==`"));
    }

    #[test]
    fn test_allows_strict_equality() {
        let violations = check_js(&Eqeqeq::new(), "if (a === b && c !== d) {}\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn test_points_at_operator() {
        let violations = check_js(&Eqeqeq::new(), "x == y;\n");
        assert_eq!(violations[0].location.column, 3);
        assert_eq!(violations[0].location.length, 2);
    }

    #[test]
    fn test_null_comparison_flagged_by_default() {
        let violations = check_js(&Eqeqeq::new(), "if (a == null) {}\n");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_allow_null_option() {
        let rule = Eqeqeq::new().allow_null(true);
        assert!(check_js(&rule, "if (a == null) {}\n").is_empty());
        assert_eq!(check_js(&rule, "if (a == 0) {}\n").len(), 1);
    }

    #[test]
    fn test_typescript_source() {
        let violations = check_ts(&Eqeqeq::new(), "const same = (a: number, b: number) => a == b;\n");
        assert_eq!(violations.len(), 1);
    }
}
