/**
 * Save Callback Handler
 *
 * POST /save is called by the collaborative editor whenever a document's
 * state changes. Whatever happens internally, the editor gets a JSON
 * acknowledgement envelope it can parse:
 *
 * - `200 {"error":0}` - saved, or nothing to save
 * - `500 {"error":1,"message":...}` - download or write failed
 *   (`200` instead when `save_failure_status_ok` is set)
 * - `400 {"error":1,"message":...}` - body is not a JSON object
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use bytes::Bytes;

use crate::backend::reconciler::service::{SaveOutcome, SaveReconciler};
use crate::shared::{AckEnvelope, AppConfig, CallbackPayload};

/// Handle a save callback (POST /save)
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that malformed payloads still receive an envelope.
pub async fn handle_save(
    State(reconciler): State<SaveReconciler>,
    State(config): State<Arc<AppConfig>>,
    body: Bytes,
) -> (StatusCode, Json<AckEnvelope>) {
    tracing::debug!(body = %String::from_utf8_lossy(&body), "Raw callback");

    let payload = match CallbackPayload::from_json(&body) {
        Ok(payload) => payload,
        Err(error) => {
            tracing::warn!(error = %error, "Rejected malformed save callback");
            return (StatusCode::BAD_REQUEST, Json(AckEnvelope::failure(error.to_string())));
        }
    };

    tracing::info!(status = payload.status, key = ?payload.key, "Callback received");

    match reconciler.handle_callback(&payload).await {
        Ok(SaveOutcome::Skipped) | Ok(SaveOutcome::Saved { .. }) => {
            (StatusCode::OK, Json(AckEnvelope::ok()))
        }
        Err(e) => {
            tracing::error!(error = %e, key = ?payload.key, "Save error");
            let status = if config.save_failure_status_ok {
                StatusCode::OK
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(AckEnvelope::failure(e.to_string())))
        }
    }
}
