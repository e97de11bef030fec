/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Document Registry
 * - `GET /files` - List source documents
 * - `GET /file/{filename}` - Download one source document
 *
 * ## Save Reconciler
 * - `POST /save` - Save callback from the collaborative editor
 */

use axum::Router;
use crate::backend::server::state::AppState;
use crate::backend::registry::handlers::{get_file, list_files};
use crate::backend::reconciler::handlers::handle_save;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the registry and save routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Document registry endpoints
        .route(
            "/files",
            axum::routing::get(list_files),
        )
        .route(
            "/file/{filename}",
            axum::routing::get(get_file),
        )
        // Save callback endpoint
        .route(
            "/save",
            axum::routing::post(handle_save),
        )
}
