//! Shared Module
//!
//! This module contains types and rules that do not depend on the HTTP server:
//! the save callback wire format, filename derivation and validation, error
//! types, and application configuration.
//!
//! # Overview
//!
//! Everything here is plain data plus pure functions, so it compiles without
//! the `ssr` feature and is usable from tests and tooling directly.

/// Save callback payload and acknowledgement envelope
pub mod callback;

/// Filename sanitization and validation
pub mod filename;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use callback::{AckEnvelope, CallbackPayload, SAVE_STATUSES};
pub use error::SharedError;
pub use filename::{
    persisted_filename, sanitize_filename, validate_source_name, MAX_FILENAME_BYTES,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
