//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `NotFound` - requested source document is missing (404)
//! - `StorageUnavailable` - filesystem listing/reading/writing failed (500)
//! - `FetchFailed` - edited document could not be downloaded
//! - `SharedError` - validation failures from the shared module (400)
//! - `Config` - startup configuration errors

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
