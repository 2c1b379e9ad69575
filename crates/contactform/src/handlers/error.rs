use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use contactform_core::storage::{repository_error_to_status_code, RepositoryError};
use contactform_core::submission::ValidationErrors;

/// A request body that could not be read as the expected JSON.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MalformedBody(pub String);

impl From<JsonRejection> for MalformedBody {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection.body_text())
    }
}

/// Handler error wrapping `anyhow::Error`.
///
/// The response is chosen by downcasting:
///
/// - `ValidationErrors` -> 400 with a `field -> message` object
/// - `MalformedBody` -> 400 with `{"error": ...}`
/// - `RepositoryError::NotFound` -> 404 with an empty body
/// - other `RepositoryError`s -> their mapped status with the error text
/// - anything else -> 500 with the error text
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(errors) = self.0.downcast_ref::<ValidationErrors>() {
            tracing::debug!(error = %errors, "Rejected submission");
            return (StatusCode::BAD_REQUEST, Json(errors)).into_response();
        }

        if let Some(malformed) = self.0.downcast_ref::<MalformedBody>() {
            tracing::debug!(error = %malformed, "Malformed request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": malformed.0 })),
            )
                .into_response();
        }

        let status_code = match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound { .. }) => return StatusCode::NOT_FOUND.into_response(),
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(error = %self.0, status = %status_code, "Application error");

        (status_code, self.0.to_string()).into_response()
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
