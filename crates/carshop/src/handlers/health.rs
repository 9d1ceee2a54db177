//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. The store was verified at startup.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
