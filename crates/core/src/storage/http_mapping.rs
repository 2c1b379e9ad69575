//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// `InvalidData` means a stored row could not be read back, which is a
/// server fault rather than a bad request.
///
/// # Examples
///
/// ```
/// use contactform_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Submission",
///     id: "7".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}
