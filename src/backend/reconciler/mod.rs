//! Save Reconciler Module
//!
//! Receives the collaborative editor's save callbacks, downloads the edited
//! document and stores it in the persisted-documents directory.
//!
//! # Module Structure
//!
//! ```text
//! reconciler/
//! ├── mod.rs          - Module exports
//! ├── service.rs      - SaveReconciler (status check, naming, fetch, write)
//! ├── download_url.rs - localhost to internal alias rewriting
//! ├── fetch.rs        - reqwest-based downloader with timeout
//! └── handlers.rs     - POST /save handler and envelope mapping
//! ```
//!
//! No state is kept between callbacks; the filesystem is the only shared
//! resource.

pub mod service;

pub mod download_url;

pub mod fetch;

pub mod handlers;

pub use service::{SaveOutcome, SaveReconciler};
pub use fetch::DocumentFetcher;
