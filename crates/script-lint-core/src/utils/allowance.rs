//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // script-lint: allow(no-console) reason="CLI entry point"
//! debugger; // script-lint: allow(no-debugger)
//! ```
//!
//! A directive applies to its own line and to the line after it.

use std::collections::HashSet;

const DIRECTIVE_PREFIX: &str = "script-lint:";

/// Result of checking for an allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
pub struct AllowDirective {
    /// Rule names that are allowed.
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

/// Checks `content` for a directive allowing `rule_name` at `line` (1-indexed).
#[must_use]
pub fn check_allow(content: &str, line: usize, rule_name: &str) -> AllowCheck {
    let lines: Vec<&str> = content.lines().collect();

    for check_line in [line.saturating_sub(1), line] {
        if check_line == 0 || check_line > lines.len() {
            continue;
        }

        if let Some(directive) = parse_allow_directive(lines[check_line - 1]) {
            if directive.rules.contains(rule_name) || directive.rules.contains("all") {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Parses an allowance directive from a line holding a `//` comment.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let start = line.find(DIRECTIVE_PREFIX)?;
    if !line[..start].trim_end().ends_with("//") {
        return None;
    }
    let rest = line[start + DIRECTIVE_PREFIX.len()..].trim();
    let rest = rest.strip_prefix("allow(")?;
    let close = rest.find(')')?;

    let rules: HashSet<String> = rest[..close]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if rules.is_empty() {
        return None;
    }

    let reason = rest[close + 1..]
        .trim()
        .strip_prefix("reason=")
        .map(|r| r.trim_matches('"').to_string());

    Some(AllowDirective { rules, reason })
}
