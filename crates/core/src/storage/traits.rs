use async_trait::async_trait;

use crate::submission::{NewSubmission, Submission};

use super::Result;

/// Append-only store of contact-form submissions.
///
/// Submissions are never updated or deleted once stored.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Inserts a submission, assigning its id and `submitted_at`.
    ///
    /// Both values are assigned as part of the single insert, so the
    /// returned record is exactly what later reads will see.
    async fn create_submission(&self, submission: &NewSubmission) -> Result<Submission>;

    /// Gets a submission by its ID.
    async fn get_submission(&self, id: i64) -> Result<Option<Submission>>;

    /// Gets every submission, newest first.
    async fn list_submissions(&self) -> Result<Vec<Submission>>;

    /// Checks that the backend can answer a trivial query.
    async fn ping(&self) -> Result<()>;
}
