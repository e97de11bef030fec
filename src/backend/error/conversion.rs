/**
 * Error Conversion
 *
 * Backend errors implement `IntoResponse` so registry handlers can return
 * them directly. Bodies are plain text (`File not found`, ...), which is
 * what the editor frontend expects from the document endpoints.
 *
 * The save endpoint does not use this conversion; it always answers with
 * an acknowledgement envelope.
 */

use axum::{
    response::{Response, IntoResponse},
    http::header,
};
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message(),
        )
            .into_response()
    }
}
