//! SQLite repository implementation.
//!
//! Implements `SubmissionRepository` from `contactform_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use tokio_rusqlite::Connection;

use contactform_core::storage::{RepositoryError, Result, SubmissionRepository};
use contactform_core::submission::{NewSubmission, Submission};

use super::conversions::{format_datetime, row_to_submission};
use super::error::map_tokio_rusqlite_error;
use super::schema;

const ENTITY: &str = "Submission";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// All statements run on one background connection, so inserts are
/// serialized and row ids are handed out in order.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl SubmissionRepository for SqliteRepository {
    async fn create_submission(&self, submission: &NewSubmission) -> Result<Submission> {
        let name = submission.name().to_string();
        let email = submission.email().to_string();
        let subject = submission.subject().map(str::to_string);
        let message = submission.message().to_string();
        // Stored at microsecond precision; truncate so the returned record
        // matches what a later read produces.
        let submitted_at = Utc::now().trunc_subsecs(6);
        let submitted_at_str = format_datetime(&submitted_at);

        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_SUBMISSION,
                    rusqlite::params![name, email, subject, message, submitted_at_str],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))?;

        tracing::debug!(submission_id = id, "Inserted submission row");

        Ok(submission.clone().into_submission(id, submitted_at))
    }

    async fn get_submission(&self, id: i64) -> Result<Option<Submission>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_SUBMISSION_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_submission) {
                    Ok(submission) => Ok(Some(submission)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_ALL_SUBMISSIONS)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_submission).map_err(wrap_err)?;

                let mut submissions = Vec::new();
                for row_result in rows {
                    submissions.push(row_result.map_err(wrap_err)?);
                }
                Ok(submissions)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }
}
