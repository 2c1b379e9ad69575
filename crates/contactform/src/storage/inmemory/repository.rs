//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use contactform_core::storage::{Result, SubmissionRepository};
use contactform_core::submission::{NewSubmission, Submission};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Submission>,
    last_id: i64,
}

/// In-memory storage backend.
///
/// Id allocation and insert happen under the same write lock, so concurrent
/// creates never share an id. Data is lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionRepository for InMemoryRepository {
    async fn create_submission(&self, submission: &NewSubmission) -> Result<Submission> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let stored = submission
            .clone()
            .into_submission(table.last_id, Utc::now());
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn get_submission(&self, id: i64) -> Result<Option<Submission>> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|s| s.id == id).cloned())
    }

    async fn list_submissions(&self) -> Result<Vec<Submission>> {
        let table = self.table.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(rows)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
