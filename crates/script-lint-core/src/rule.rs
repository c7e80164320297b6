//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A per-file lint rule over a tree-sitter syntax tree.
///
/// Rules receive the parsed tree and walk it with the helpers in
/// [`crate::utils`].
///
/// # Example
///
/// ```ignore
/// use script_lint_core::{FileContext, Rule, Violation};
/// use script_lint_core::utils::walk;
///
/// pub struct NoWith;
///
/// impl Rule for NoWith {
///     fn name(&self) -> &'static str { "no-with" }
///     fn code(&self) -> &'static str { "JS099" }
///
///     fn check(&self, ctx: &FileContext, tree: &tree_sitter::Tree) -> Vec<Violation> {
///         let mut violations = Vec::new();
///         walk(tree.root_node(), |node| {
///             if node.kind() == "with_statement" {
///                 violations.push(ctx.violation(self, &node, "Unexpected `with`"));
///             }
///         });
///         violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-var").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "JS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `tree` - The parsed syntax tree of the file
    fn check(&self, ctx: &FileContext, tree: &tree_sitter::Tree) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
