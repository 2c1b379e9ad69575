//! In-memory storage backend.
//!
//! Keeps submissions in a `Vec` behind a tokio `RwLock`. Useful for
//! development and tests where persistence is not required.

mod repository;

pub use repository::InMemoryRepository;
