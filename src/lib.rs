//! DocBridge - Main Library
//!
//! DocBridge is a small backend that connects a browser-based document editor
//! to a directory of documents and to the save callback of an external
//! collaborative editing server.
//!
//! # Overview
//!
//! - Lists and serves the `.docx` source documents offered for editing
//! - Receives the editor's save callbacks, downloads the edited document and
//!   stores it under a sanitized name
//! - Serves the editor UI and its plugins as static files
//!
//! # Module Structure
//!
//! - **`shared`** - Types and pure rules with no server dependency
//!   - Callback payload and acknowledgement envelope
//!   - Filename sanitization and validation
//!   - Configuration and error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and middleware
//!   - Document Registry and Save Reconciler
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use docbridge::backend::server::create_app;
//! use docbridge::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::default()).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Types and rules shared by the server and its tooling
pub mod shared;

/// Server-side code
pub mod backend;
