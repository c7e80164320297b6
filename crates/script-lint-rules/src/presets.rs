//! Per-language rule sets.

use crate::{Eqeqeq, NoConsole, NoDebugger, NoExplicitAny, NoNonNullAssertion, NoVar};
use script_lint_core::RuleBox;

/// Rules that apply to JavaScript sources.
///
/// Includes:
/// - `no-var` (JS001)
/// - `no-debugger` (JS002)
/// - `eqeqeq` (JS003)
/// - `no-console` (JS004)
#[must_use]
pub fn javascript_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NoVar::new()),
        Box::new(NoDebugger::new()),
        Box::new(Eqeqeq::new()),
        Box::new(NoConsole::new()),
    ]
}

/// Rules that apply to TypeScript sources.
///
/// All of [`javascript_rules`] plus:
/// - `no-explicit-any` (TS001)
/// - `no-non-null-assertion` (TS002)
#[must_use]
pub fn typescript_rules() -> Vec<RuleBox> {
    let mut rules = javascript_rules();
    rules.push(Box::new(NoExplicitAny::new()));
    rules.push(Box::new(NoNonNullAssertion::new()));
    rules
}
