/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds only immutable values built once at startup:
 * - the validated configuration
 * - the Document Registry (source directory)
 * - the Save Reconciler (persisted directory, host alias, HTTP client)
 *
 * There is no shared mutable state between requests. Cloning `AppState`
 * is cheap (`Arc` config, `reqwest::Client` is reference counted).
 *
 * # Example
 *
 * ```rust,ignore
 * use docbridge::backend::registry::DocumentRegistry;
 * use axum::extract::State;
 *
 * async fn handler(State(registry): State<DocumentRegistry>) {
 *     let names = registry.list_documents().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::reconciler::SaveReconciler;
use crate::backend::registry::DocumentRegistry;
use crate::shared::AppConfig;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `config` - Validated configuration, injected everywhere it is needed
/// * `registry` - Read-only access to source documents
/// * `reconciler` - Save callback processing
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub registry: DocumentRegistry,
    pub reconciler: SaveReconciler,
}

impl AppState {
    /// Build every component from the configuration
    pub fn from_config(config: AppConfig) -> Result<Self, BackendError> {
        let registry = DocumentRegistry::new(config.files_dir.clone());
        let reconciler = SaveReconciler::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            registry,
            reconciler,
        })
    }
}

/// Implement FromRef for the configuration
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// Implement FromRef for DocumentRegistry
///
/// This allows registry handlers to extract `State<DocumentRegistry>` directly.
impl FromRef<AppState> for DocumentRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.registry.clone()
    }
}

/// Implement FromRef for SaveReconciler
impl FromRef<AppState> for SaveReconciler {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.reconciler.clone()
    }
}
