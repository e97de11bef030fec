//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, static files, middleware
//! └── api_routes.rs   - Registry and save callback endpoints
//! ```
//!
//! # Route Types
//!
//! ## API Routes
//!
//! - `GET /files` - List source documents
//! - `GET /file/{filename}` - Fetch a source document
//! - `POST /save` - Editor save callback
//!
//! ## Static Routes
//!
//! - `/plugins/*` - Editor plugin assets
//! - everything else - Editor UI (`editor.html`, scripts, styles)

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
