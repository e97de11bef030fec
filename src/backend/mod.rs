//! Backend Module
//!
//! This module contains all server-side code for the document bridge.
//! It provides an Axum HTTP server that sits between a browser-based
//! document editor, a directory of source documents, and the save callback
//! of an external collaborative editing server.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Document Registry: listing and serving source documents
//! - Save Reconciler: the editor's save callback (fetch and persist)
//! - Static file serving for the editor UI and plugins
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration and middleware
//! ├── registry/       - Source document listing and retrieval
//! ├── reconciler/     - Save callback handling
//! └── error/          - Error types and HTTP conversion
//! ```
//!
//! # Concurrency
//!
//! Requests are served concurrently by Tokio. Handlers share no mutable
//! state: the registry and reconciler are immutable after startup, and the
//! only suspension points are the outbound fetch and the file write. Two
//! callbacks for the same key race; whichever write finishes last wins.
//!
//! # Error Handling
//!
//! - Registry failures become plain-text HTTP errors (`404`, `400`, `500`)
//! - Save failures always become a JSON acknowledgement envelope
//! - Nothing in a request path panics the process

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Source document registry
#[cfg(feature = "ssr")]
pub mod registry;

/// Save callback reconciliation
#[cfg(feature = "ssr")]
pub mod reconciler;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState};
#[cfg(feature = "ssr")]
pub use error::BackendError;
#[cfg(feature = "ssr")]
pub use registry::DocumentRegistry;
#[cfg(feature = "ssr")]
pub use reconciler::{SaveOutcome, SaveReconciler};
