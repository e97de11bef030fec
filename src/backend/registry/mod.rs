//! Document Registry Module
//!
//! Read-only listing and retrieval of the source documents offered for
//! editing. The registry never writes; persisted documents live in a
//! separate directory owned by the save reconciler.

/// Directory access
pub mod store;

/// HTTP handlers
pub mod handlers;

pub use store::{DocumentRegistry, SourceDocument, DOCUMENT_EXTENSION, DOCX_CONTENT_TYPE};
