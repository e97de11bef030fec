/**
 * Server Initialization
 *
 * This module builds the Axum application from a validated configuration.
 *
 * # Initialization Process
 *
 * 1. Create the persisted-documents directory if it is missing
 * 2. Check that the source documents directory exists (warn only)
 * 3. Build the registry, reconciler and shared HTTP client
 * 4. Create and configure the router
 */

use axum::Router;
use std::path::Path;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the persisted-documents directory cannot be created or the
/// HTTP client cannot be built. A missing source directory is only logged;
/// `GET /files` reports it per request.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing document bridge server");

    ensure_save_dir(&config.save_dir).await?;

    if !tokio::fs::try_exists(&config.files_dir).await.unwrap_or(false) {
        tracing::warn!(
            dir = %config.files_dir.display(),
            "Source documents directory does not exist; GET /files will fail until it is created"
        );
    }

    let app_state = AppState::from_config(config)?;
    tracing::info!(
        files_dir = %app_state.config.files_dir.display(),
        save_dir = %app_state.config.save_dir.display(),
        alias = %app_state.config.internal_host_alias,
        "Document registry and save reconciler initialized"
    );

    Ok(create_router(app_state))
}

/// Create the persisted-documents directory (and parents) if needed
pub async fn ensure_save_dir(save_dir: &Path) -> Result<(), BackendError> {
    tokio::fs::create_dir_all(save_dir)
        .await
        .map_err(|e| BackendError::storage(save_dir, &e))
}
