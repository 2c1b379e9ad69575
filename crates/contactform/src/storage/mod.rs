//! Storage backend implementations.
//!
//! Concrete implementations of `contactform_core::storage::SubmissionRepository`,
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: process-local storage, nothing survives a restart
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p contactform --no-default-features --features inmemory
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p contactform --features sqlite"
);

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryRepository;
