//! Configuration types for script-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::Severity;

/// Top-level configuration for script-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing exit status (default: "error").
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// JavaScript language settings.
    #[serde(default)]
    pub javascript: LanguageConfig,

    /// TypeScript language settings.
    #[serde(default)]
    pub typescript: LanguageConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Effective failure threshold.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Abort the run when a file cannot be parsed.
    #[serde(default)]
    pub fail_on_parse_error: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_excludes(),
            respect_gitignore: true,
            fail_on_parse_error: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_excludes() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
}

fn default_true() -> bool {
    true
}

/// Settings for one source language (`[javascript]` or `[typescript]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Whether files of this language are linted.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// File extensions, each with a leading dot. `None` keeps the
    /// language's built-in list.
    #[serde(default)]
    pub extensions: Option<Vec<String>>,

    /// Ignore file whose lines are extra exclude patterns.
    #[serde(default)]
    pub ignore_file: Option<PathBuf>,

    /// Path to `tsconfig.json` (TypeScript only).
    #[serde(default)]
    pub tsconfig: Option<PathBuf>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extensions: None,
            ignore_file: None,
            tsconfig: None,
        }
    }
}

impl LanguageConfig {
    /// Configured extensions, falling back to `defaults`.
    #[must_use]
    pub fn extensions_or(&self, defaults: &[&str]) -> Vec<String> {
        self.extensions
            .clone()
            .unwrap_or_else(|| defaults.iter().map(|s| (*s).to_string()).collect())
    }

    /// Validates the section, `section` naming it in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if an explicit extension list is
    /// empty or an extension lacks its leading dot.
    pub fn validate(&self, section: &str) -> Result<(), ConfigError> {
        let Some(extensions) = &self.extensions else {
            return Ok(());
        };
        if extensions.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{section}.extensions: at least one extension is required"
            )));
        }
        for ext in extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::Validation(format!(
                    "{section}.extensions: `{ext}` must look like `.js`"
                )));
            }
        }
        Ok(())
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading a configuration file.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in a configuration file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Configuration is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}
