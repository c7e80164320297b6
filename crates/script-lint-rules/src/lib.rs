//! # script-lint-rules
//!
//! Built-in lint rules for script-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Languages | Description |
//! |------|------|-----------|-------------|
//! | JS001 | `no-var` | js, ts | Requires `let`/`const` instead of `var` |
//! | JS002 | `no-debugger` | js, ts | Forbids `debugger` statements |
//! | JS003 | `eqeqeq` | js, ts | Requires `===` and `!==` |
//! | JS004 | `no-console` | js, ts | Forbids `console` calls |
//! | TS001 | `no-explicit-any` | ts | Forbids the `any` type |
//! | TS002 | `no-non-null-assertion` | ts | Forbids `value!` assertions |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod eqeqeq;
mod no_console;
mod no_debugger;
mod no_explicit_any;
mod no_non_null_assertion;
mod no_var;
mod presets;

pub use eqeqeq::Eqeqeq;
pub use no_console::NoConsole;
pub use no_debugger::NoDebugger;
pub use no_explicit_any::NoExplicitAny;
pub use no_non_null_assertion::NoNonNullAssertion;
pub use no_var::NoVar;
pub use presets::{javascript_rules, typescript_rules};

/// Re-export core types for convenience.
pub use script_lint_core::{Rule, Severity, Violation};
