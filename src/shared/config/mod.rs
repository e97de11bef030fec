//! Application configuration module
//!
//! Provides the configuration value that is injected into every component.
//! Directory paths, the internal hostname alias and the fallback filename all
//! live here; nothing reads them from process-wide state.
//!
//! The same struct is deserialized from an optional TOML file, so every field
//! has a serde default matching [`AppConfig::default`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory holding the read-only source documents
pub const DEFAULT_FILES_DIR: &str = "public/files";

/// Default directory receiving documents saved by the editor
pub const DEFAULT_SAVE_DIR: &str = "saved";

/// Default directory for the editor UI static files
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Default directory for editor plugin assets
pub const DEFAULT_PLUGINS_DIR: &str = "plugins";

/// Default hostname substituted for `localhost` in callback download URLs
pub const DEFAULT_INTERNAL_HOST_ALIAS: &str = "host.docker.internal";

/// Default persisted filename when a callback carries no usable key
pub const DEFAULT_SAVE_FILENAME: &str = "edited.docx";

/// Default timeout for fetching edited documents
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Port the HTTP server listens on (all interfaces)
    pub port: u16,
    /// Source documents directory (read-only)
    pub files_dir: PathBuf,
    /// Persisted documents directory (written by the save callback)
    pub save_dir: PathBuf,
    /// Static root for the editor UI
    pub public_dir: PathBuf,
    /// Static root served under `/plugins`
    pub plugins_dir: PathBuf,
    /// Hostname that replaces `localhost` in download URLs
    pub internal_host_alias: String,
    /// Fallback filename for callbacks without a usable key
    pub default_filename: String,
    /// Timeout applied to each document fetch, in seconds
    pub fetch_timeout_secs: u64,
    /// Answer failed saves with HTTP 200 instead of 500 (envelope unchanged)
    pub save_failure_status_ok: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            files_dir: PathBuf::from(DEFAULT_FILES_DIR),
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            plugins_dir: PathBuf::from(DEFAULT_PLUGINS_DIR),
            internal_host_alias: DEFAULT_INTERNAL_HOST_ALIAS.to_string(),
            default_filename: DEFAULT_SAVE_FILENAME.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            save_failure_status_ok: false,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder seeded with defaults
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Parse a configuration from TOML text; missing keys take defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML configuration file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "fetch_timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.internal_host_alias.trim().is_empty() {
            return Err(ConfigError::MissingValue("internal_host_alias"));
        }
        if url::Host::parse(&self.internal_host_alias).is_err() {
            return Err(ConfigError::InvalidValue {
                key: "internal_host_alias",
                message: format!("'{}' is not a valid hostname", self.internal_host_alias),
            });
        }
        Ok(())
    }

    /// Fetch timeout as a `Duration`
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Start from an existing configuration (e.g. one loaded from TOML)
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn files_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.files_dir = dir.into();
        self
    }

    pub fn save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.save_dir = dir.into();
        self
    }

    pub fn public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.public_dir = dir.into();
        self
    }

    pub fn plugins_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.plugins_dir = dir.into();
        self
    }

    pub fn internal_host_alias(mut self, alias: impl Into<String>) -> Self {
        self.config.internal_host_alias = alias.into();
        self
    }

    pub fn default_filename(mut self, name: impl Into<String>) -> Self {
        self.config.default_filename = name.into();
        self
    }

    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.config.fetch_timeout_secs = secs;
        self
    }

    pub fn save_failure_status_ok(mut self, enabled: bool) -> Self {
        self.config.save_failure_status_ok = enabled;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("failed to read config file {path:?}: {message}")]
    Read { path: PathBuf, message: String },
    #[error("failed to parse config: {0}")]
    Parse(String),
}
