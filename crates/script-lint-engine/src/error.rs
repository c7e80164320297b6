//! Engine error type.

use std::path::PathBuf;

use script_lint_core::ConfigError;

/// Errors raised while initializing or running an engine.
///
/// [`crate::Engine::init`] returns whatever its strategy or base raised,
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Invalid or unreadable configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error reading source files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The grammar is incompatible with the linked tree-sitter runtime.
    #[error("Incompatible grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// A source file could not be parsed.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// A blocking background task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Directory traversal failed.
    #[error("File discovery failed: {0}")]
    Walk(#[from] ignore::Error),

    /// A lint operation was attempted before `init()` completed.
    #[error("engine is not initialized; call init() first")]
    NotInitialized,
}
