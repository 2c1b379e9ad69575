//! Contact submission handlers.
//!
//! Handlers talk to storage only through the `SubmissionRepository` trait
//! object held in `AppState`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use contactform_core::storage::RepositoryError;
use contactform_core::submission::{
    validate, CreateSubmissionRequest, Submission, SubmissionReceipt,
};

use crate::{
    handlers::{error::MalformedBody, AppError},
    state::AppState,
};

/// Store a new submission (POST /api/contact).
///
/// Responds 201 with a receipt and a `Location` header pointing at the
/// stored submission.
pub async fn create_submission(
    State(state): State<AppState>,
    payload: Result<Json<CreateSubmissionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(MalformedBody::from)?;

    let new_submission = validate(request)?;

    let submission = state
        .submission_repo
        .create_submission(&new_submission)
        .await?;

    tracing::info!(submission_id = submission.id, "Stored contact submission");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/contact/{}", submission.id))],
        Json(SubmissionReceipt::for_name(&submission.name)),
    ))
}

/// List all submissions, newest first (GET /api/contact).
pub async fn list_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = state.submission_repo.list_submissions().await?;

    tracing::debug!(count = submissions.len(), "Listed submissions");

    Ok(Json(submissions))
}

/// Get a single submission by ID (GET /api/contact/{id}).
pub async fn get_submission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Submission>, AppError> {
    let submission = state.submission_repo.get_submission(id).await?;

    match submission {
        Some(s) => Ok(Json(s)),
        None => Err(RepositoryError::NotFound {
            entity_type: "Submission",
            id: id.to_string(),
        }
        .into()),
    }
}
