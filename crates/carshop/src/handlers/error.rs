use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use carshop_core::storage::{
    repository_error_public_message, repository_error_to_status_code, RepositoryError,
};

/// Handler error that renders as `{"error": "..."}`.
///
/// Repository errors keep their mapped status code; anything else is a 500.
/// Store detail is logged here and never sent to the client.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                (
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    repository_error_public_message(repo_error),
                )
            }
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        (status_code, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Unwraps a JSON body, turning any rejection into a 400.
pub fn parse_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Invalid JSON payload");
        AppError::from(RepositoryError::Validation(
            "Invalid request payload".to_string(),
        ))
    })
}

/// Unwraps a numeric path id, turning a malformed segment into a 400.
pub fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Invalid path id");
        AppError::from(RepositoryError::Validation("Invalid id".to_string()))
    })
}
