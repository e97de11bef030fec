/**
 * Server Configuration
 *
 * This module assembles the `AppConfig` used by the server from three
 * layers, later ones winning:
 *
 * 1. Built-in defaults
 * 2. A TOML file named by `DOCBRIDGE_CONFIG` (optional)
 * 3. Individual environment variables
 *
 * # Environment Variables
 *
 * | Variable | Field |
 * |---|---|
 * | `SERVER_PORT` | `port` |
 * | `FILES_DIR` | `files_dir` |
 * | `SAVE_DIR` | `save_dir` |
 * | `PUBLIC_DIR` | `public_dir` |
 * | `PLUGINS_DIR` | `plugins_dir` |
 * | `INTERNAL_HOST_ALIAS` | `internal_host_alias` |
 * | `DEFAULT_SAVE_FILENAME` | `default_filename` |
 * | `FETCH_TIMEOUT_SECS` | `fetch_timeout_secs` |
 * | `SAVE_FAILURE_STATUS_OK` | `save_failure_status_ok` |
 *
 * # Error Handling
 *
 * Any unparseable or invalid value stops startup.
 */

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use crate::shared::{AppConfig, AppConfigBuilder, ConfigError};

/// Names the optional TOML configuration file
pub const CONFIG_PATH_VAR: &str = "DOCBRIDGE_CONFIG";

pub const SERVER_PORT_VAR: &str = "SERVER_PORT";
pub const FILES_DIR_VAR: &str = "FILES_DIR";
pub const SAVE_DIR_VAR: &str = "SAVE_DIR";
pub const PUBLIC_DIR_VAR: &str = "PUBLIC_DIR";
pub const PLUGINS_DIR_VAR: &str = "PLUGINS_DIR";
pub const INTERNAL_HOST_ALIAS_VAR: &str = "INTERNAL_HOST_ALIAS";
pub const DEFAULT_SAVE_FILENAME_VAR: &str = "DEFAULT_SAVE_FILENAME";
pub const FETCH_TIMEOUT_SECS_VAR: &str = "FETCH_TIMEOUT_SECS";
pub const SAVE_FAILURE_STATUS_OK_VAR: &str = "SAVE_FAILURE_STATUS_OK";

/// Load configuration from the process environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` in place of the environment
pub fn load_config_from(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let base = match lookup(CONFIG_PATH_VAR) {
        Some(path) => {
            tracing::info!(path = %path, "Loading configuration file");
            AppConfig::from_toml_file(Path::new(&path))?
        }
        None => AppConfig::default(),
    };

    let mut builder = AppConfigBuilder::from_config(base);

    if let Some(value) = lookup(SERVER_PORT_VAR) {
        builder = builder.port(parse_value(SERVER_PORT_VAR, &value)?);
    }
    if let Some(value) = lookup(FILES_DIR_VAR) {
        builder = builder.files_dir(value);
    }
    if let Some(value) = lookup(SAVE_DIR_VAR) {
        builder = builder.save_dir(value);
    }
    if let Some(value) = lookup(PUBLIC_DIR_VAR) {
        builder = builder.public_dir(value);
    }
    if let Some(value) = lookup(PLUGINS_DIR_VAR) {
        builder = builder.plugins_dir(value);
    }
    if let Some(value) = lookup(INTERNAL_HOST_ALIAS_VAR) {
        builder = builder.internal_host_alias(value);
    }
    if let Some(value) = lookup(DEFAULT_SAVE_FILENAME_VAR) {
        builder = builder.default_filename(value);
    }
    if let Some(value) = lookup(FETCH_TIMEOUT_SECS_VAR) {
        builder = builder.fetch_timeout_secs(parse_value(FETCH_TIMEOUT_SECS_VAR, &value)?);
    }
    if let Some(value) = lookup(SAVE_FAILURE_STATUS_OK_VAR) {
        builder = builder.save_failure_status_ok(parse_flag(SAVE_FAILURE_STATUS_OK_VAR, &value)?);
    }

    builder.build()
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        message: format!("'{value}': {e}"),
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key,
            message: format!("'{other}' is not a boolean"),
        }),
    }
}
