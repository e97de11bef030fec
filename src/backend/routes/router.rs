/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (document registry, save callback)
 * 2. Plugin assets under `/plugins`
 * 3. Fallback: the editor UI static root (404 for unknown files)
 *
 * # Middleware
 *
 * - Request body limit of 50 MiB
 * - Permissive CORS
 * - HTTP trace spans for every request
 */

use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Maximum accepted request body size
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the registry and reconciler
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let public_dir = app_state.config.public_dir.clone();
    let plugins_dir = app_state.config.plugins_dir.clone();

    let router = configure_api_routes(Router::new());

    // Static assets: plugins first, then the UI root as the fallback
    let router = router
        .nest_service("/plugins", ServeDir::new(plugins_dir))
        .fallback_service(ServeDir::new(public_dir));

    let router = router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

    router.with_state(app_state)
}
