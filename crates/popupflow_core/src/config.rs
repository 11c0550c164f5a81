//! Process configuration parsed from environment variables.
//!
//! # Responsibility
//! - Resolve log level and log directory for binaries embedding the core.
//!
//! # Invariants
//! - Blank values are treated as unset.
//! - Parsing never touches the file system.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Env var holding the log level (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "POPUPFLOW_LOG_LEVEL";
/// Env var holding the absolute log directory; file logging is off when unset.
pub const ENV_LOG_DIR: &str = "POPUPFLOW_LOG_DIR";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "{ENV_LOG_LEVEL}: {message}"),
            Self::RelativeLogDir(message) => write!(f, "{ENV_LOG_DIR}: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Typed runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Builds config from the process environment.
    ///
    /// Optional:
    /// - `POPUPFLOW_LOG_LEVEL`: build-mode default when absent
    /// - `POPUPFLOW_LOG_DIR`: absolute path; file logging disabled when absent
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let log_level = match read(ENV_LOG_LEVEL) {
            Some(value) => normalize_level(&value).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };
        let log_dir = read(ENV_LOG_DIR)
            .map(|value| normalize_log_dir(&value).map_err(ConfigError::RelativeLogDir))
            .transpose()?;

        Ok(Self { log_level, log_dir })
    }

    /// Whether file logging should be initialized.
    pub fn file_logging_enabled(&self) -> bool {
        self.log_dir.is_some()
    }
}
