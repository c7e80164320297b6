//! # script-lint-engine
//!
//! Strategy-based lint engine for JavaScript and TypeScript.
//!
//! An [`Engine`] is built for one [`StrategyKind`]. Calling
//! [`Engine::init`] creates that language's [`LintStrategy`], awaits its
//! initialization, then hands it to an [`EngineBase`] which owns it from then
//! on. This crate provides:
//!
//! - [`Engine`], generic over its base and strategy factory
//! - [`JavascriptStrategy`] and [`TypescriptStrategy`]
//! - [`LintBase`] for file discovery and lint runs
//! - [`EngineError`], the single error type of the crate

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod base;
pub mod engine;
pub mod error;
pub mod javascript;
pub mod strategy;
pub mod typescript;

pub use base::{EngineBase, LintBase, RuleDescriptor};
pub use engine::Engine;
pub use error::EngineError;
pub use javascript::JavascriptStrategy;
pub use strategy::{
    unknown_rule_names, DefaultStrategyFactory, LintStrategy, StrategyFactory, StrategyKind,
};
pub use typescript::TypescriptStrategy;
