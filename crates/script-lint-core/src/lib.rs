//! # script-lint-core
//!
//! Core framework for linting JavaScript and TypeScript with tree-sitter.
//!
//! This crate provides the foundational traits and types shared by the
//! rule set and the lint engine:
//!
//! - [`Rule`] trait for per-file syntax tree rules
//! - [`FileContext`] handed to rules while checking a file
//! - [`Violation`] and [`LintResult`] for representing lint findings
//! - [`Config`] for the `script-lint.toml` configuration file

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use config::{AnalyzerConfig, Config, ConfigError, LanguageConfig, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use types::{
    LintResult, Location, Replacement, Severity, Suggestion, Violation, ViolationDiagnostic,
};
