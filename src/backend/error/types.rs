/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the backend server.
 *
 * # Error Categories
 *
 * ## Registry Errors
 *
 * Raised while serving source documents:
 * - `NotFound` - the requested document does not exist
 * - `StorageUnavailable` - the source directory cannot be read
 * - `SharedError` - the requested name is unsafe (validation failure)
 *
 * ## Save Errors
 *
 * Raised while handling a save callback:
 * - `FetchFailed` - the edited document could not be downloaded
 * - `StorageUnavailable` - the document could not be written
 *
 * Save errors never reach the client as a bare status code; the save
 * handler turns them into an acknowledgement envelope.
 */

use std::path::PathBuf;

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::{ConfigError, SharedError};

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested source document does not exist
    #[error("File not found: {name}")]
    NotFound {
        /// Name the client asked for
        name: String,
    },

    /// Reading or writing the filesystem failed (permissions, disk, ...)
    #[error("Storage unavailable at {path:?}: {message}")]
    StorageUnavailable {
        /// Directory or file involved
        path: PathBuf,
        /// Underlying I/O error
        message: String,
    },

    /// Downloading the edited document failed (network, timeout, non-2xx)
    #[error("Failed to fetch {url}: {message}")]
    FetchFailed {
        /// Target URL after host rewriting
        url: String,
        /// Human-readable failure
        message: String,
    },

    /// The outbound HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Startup configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn storage(path: impl Into<PathBuf>, source: &std::io::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `SharedError` - 400 Bad Request for validation, 500 otherwise
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::StorageUnavailable { .. }
            | Self::FetchFailed { .. }
            | Self::HttpClient(_)
            | Self::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing error message
    ///
    /// `NotFound` keeps the historical plain `File not found` body.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { .. } => "File not found".to_string(),
            other => other.to_string(),
        }
    }
}
