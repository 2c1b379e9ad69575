//! Application state shared by all request handlers.

use std::sync::Arc;

use anyhow::Result;

use contactform_core::storage::SubmissionRepository;

use crate::config::Config;

#[cfg(feature = "inmemory")]
use crate::storage::InMemoryRepository;
#[cfg(feature = "sqlite")]
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// Cloned for each request. The repository handle is the only shared
/// resource; handlers keep no other state between requests.
#[derive(Clone)]
pub struct AppState {
    pub submission_repo: Arc<dyn SubmissionRepository>,
}

impl AppState {
    pub fn new(submission_repo: Arc<dyn SubmissionRepository>) -> Self {
        Self { submission_repo }
    }

    /// Creates state backed by the SQLite database at `config.sqlite_path`.
    #[cfg(feature = "sqlite")]
    pub async fn from_config(config: &Config) -> Result<Self> {
        let repo = SqliteRepository::new(&config.sqlite_path).await?;
        tracing::info!(path = %config.sqlite_path, "Using SQLite storage");
        Ok(Self::new(Arc::new(repo)))
    }

    /// Creates state backed by process-local storage.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(_config: &Config) -> Result<Self> {
        tracing::warn!("Using in-memory storage, submissions will not survive a restart");
        Ok(Self::new(Arc::new(InMemoryRepository::new())))
    }
}
