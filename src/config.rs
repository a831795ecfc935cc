//! Configuration loading.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analysis::{PathMatch, ProtectedDir};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "READY_CHECK_CONFIG";

/// Overrides the secret pattern data file location.
pub const PATTERNS_ENV: &str = "READY_CHECK_PATTERNS";

/// Filter for internal `tracing` output; logging is off when unset.
pub const LOG_ENV: &str = "READY_CHECK_LOG";

/// Data file name looked up next to the executable.
pub const PATTERNS_FILE_NAME: &str = "secret-patterns.json";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("protected_dir must not be empty")]
    EmptyProtectedDir,

    #[error("cannot locate scanner executable: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("cannot locate installation directory of the scanner")]
    NoInstallDir,
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the directory whose writes are scanned.
    pub protected_dir: String,

    /// How `protected_dir` is matched against the target path.
    pub path_match: PathMatch,

    /// Secret pattern data file; defaults to one next to the executable.
    pub patterns_file: Option<PathBuf>,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protected_dir: ".ready-check".to_string(),
            path_match: PathMatch::default(),
            patterns_file: None,
            audit: AuditConfig::default(),
        }
    }
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load the user config, falling back to defaults when none exists.
    ///
    /// `READY_CHECK_PATTERNS` takes precedence over `patterns_file`.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Config::default(),
        };

        if let Ok(path) = std::env::var(PATTERNS_ENV) {
            config.patterns_file = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Parse and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if config.protected_dir.is_empty() {
            return Err(ConfigError::EmptyProtectedDir);
        }
        Ok(config)
    }

    /// Get config path.
    /// Respects READY_CHECK_CONFIG env var for testing.
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(".claude/ready-check/config.toml"))
    }

    /// Resolve the secret pattern data file.
    pub fn patterns_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.patterns_file {
            return Ok(path.clone());
        }
        let exe = std::env::current_exe().map_err(ConfigError::CurrentExe)?;
        let dir = exe.parent().ok_or(ConfigError::NoInstallDir)?;
        Ok(dir.join(PATTERNS_FILE_NAME))
    }

    /// The directory gate built from this config.
    pub fn protected(&self) -> ProtectedDir {
        ProtectedDir::new(&self.protected_dir, self.path_match)
    }
}
