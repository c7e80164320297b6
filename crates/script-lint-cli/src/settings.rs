//! Per-invocation settings: the config file in effect, its contents and
//! the directory that gets linted.
//!
//! A `--config` flag wins outright. Otherwise the first existing file among
//! `{path}/script-lint.toml`, `{path}/.script-lint.toml` and
//! `{global dir}/config.toml` is used, and with none of them the built-in
//! defaults apply. The global directory is `$SCRIPT_LINT_CONFIG_DIR`, else
//! `~/.script-lint`.

use anyhow::{Context, Result};
use script_lint_core::Config;
use script_lint_engine::{unknown_rule_names, StrategyKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PROJECT_FILES: [&str; 2] = ["script-lint.toml", ".script-lint.toml"];
const GLOBAL_FILE: &str = "config.toml";
const GLOBAL_DIR_ENV: &str = "SCRIPT_LINT_CONFIG_DIR";

/// How the config file in effect was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Named with `--config`.
    Flag,
    /// Found next to the linted path.
    Project,
    /// Found in the global config directory.
    Global,
    /// No file; built-in defaults.
    Builtin,
}

/// Resolved configuration for one `check` or `list-rules` run.
#[derive(Debug)]
pub struct Settings {
    origin: Origin,
    file: Option<PathBuf>,
    config: Config,
    root: PathBuf,
}

impl Settings {
    /// Finds and loads the config that applies to `path`.
    ///
    /// # Errors
    ///
    /// Fails if the chosen file cannot be read or parsed. A `--config` file
    /// that does not exist is an error, not a fallback to defaults.
    pub fn load(path: &Path, flag: Option<&Path>) -> Result<Self> {
        Self::load_with(path, flag, global_config_dir().as_deref())
    }

    fn load_with(path: &Path, flag: Option<&Path>, global_dir: Option<&Path>) -> Result<Self> {
        let chosen = match flag {
            Some(file) => Some((Origin::Flag, file.to_path_buf())),
            None => find_config_file(path, global_dir),
        };

        let (origin, file, config) = match chosen {
            Some((origin, file)) => {
                if origin == Origin::Global {
                    info!("Using global config: {}", file.display());
                } else {
                    debug!("Using config: {}", file.display());
                }
                let config = Config::from_file(&file)
                    .with_context(|| format!("Failed to load config: {}", file.display()))?;
                (origin, Some(file), config)
            }
            None => {
                debug!("No config file found, using defaults");
                (Origin::Builtin, None, Config::default())
            }
        };

        for name in unknown_rule_names(&config) {
            warn!("Unknown rule in config: {}", name);
        }

        let root = lint_root(path, &config.analyzer.root);
        Ok(Self {
            origin,
            file,
            config,
            root,
        })
    }

    /// How the config file was chosen.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The config file in effect, if any.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Loaded configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory to lint: `analyzer.root` resolved against the given path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Languages to lint: `only` if given, else every language the config enables.
    #[must_use]
    pub fn languages(&self, only: Option<StrategyKind>) -> Vec<StrategyKind> {
        if let Some(kind) = only {
            if !kind.is_enabled(&self.config) {
                debug!("{kind} is disabled in config but was requested explicitly");
            }
            return vec![kind];
        }
        StrategyKind::ALL
            .into_iter()
            .filter(|kind| kind.is_enabled(&self.config))
            .collect()
    }

    /// Consumes the settings, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> Config {
        self.config
    }
}

fn find_config_file(path: &Path, global_dir: Option<&Path>) -> Option<(Origin, PathBuf)> {
    PROJECT_FILES
        .iter()
        .map(|name| (Origin::Project, path.join(name)))
        .chain(global_dir.map(|dir| (Origin::Global, dir.join(GLOBAL_FILE))))
        .find(|(_, file)| file.is_file())
}

fn lint_root(path: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else if configured == Path::new(".") {
        path.to_path_buf()
    } else {
        path.join(configured)
    }
}

/// Global config directory: `$SCRIPT_LINT_CONFIG_DIR`, else `~/.script-lint`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os(GLOBAL_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home::home_dir().map(|home| home.join(".script-lint")),
    }
}
