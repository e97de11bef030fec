/**
 * Document Registry Handlers
 *
 * - GET /files - JSON array of source document names
 * - GET /file/{filename} - raw document bytes with an inline disposition
 */

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::BackendError;
use crate::backend::registry::store::DocumentRegistry;

/// List available source documents (GET /files)
///
/// # Errors
///
/// * `500 Internal Server Error` - the source directory cannot be read
pub async fn list_files(
    State(registry): State<DocumentRegistry>,
) -> Result<Json<Vec<String>>, BackendError> {
    let files = registry.list_documents().await?;
    tracing::info!(count = files.len(), ?files, "Files list");
    Ok(Json(files))
}

/// Serve one source document (GET /file/{filename})
///
/// # Errors
///
/// * `400 Bad Request` - the name contains separators or parent references
/// * `404 Not Found` - no such document
/// * `500 Internal Server Error` - the document could not be read
pub async fn get_file(
    State(registry): State<DocumentRegistry>,
    Path(filename): Path<String>,
) -> Result<Response, BackendError> {
    let document = registry.fetch_document(&filename).await?;

    let disposition = HeaderValue::from_bytes(document.content_disposition().as_bytes())
        .unwrap_or_else(|_| HeaderValue::from_static("inline"));

    tracing::debug!(name = %document.name, bytes = document.content.len(), "Serving source document");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(document.content_type())),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response())
}
