//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create the submissions table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out an id again after the
/// highest row is removed by hand.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS contact_submissions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    subject TEXT,
    message TEXT NOT NULL,
    submitted_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contact_submissions_submitted_at
    ON contact_submissions(submitted_at);
"#;

pub const INSERT_SUBMISSION: &str = r#"
INSERT INTO contact_submissions (name, email, subject, message, submitted_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_SUBMISSION_BY_ID: &str = r#"
SELECT id, name, email, subject, message, submitted_at
FROM contact_submissions
WHERE id = ?1
"#;

/// Newest first; `id` breaks ties between rows written in the same microsecond.
pub const SELECT_ALL_SUBMISSIONS: &str = r#"
SELECT id, name, email, subject, message, submitted_at
FROM contact_submissions
ORDER BY submitted_at DESC, id DESC
"#;

pub const PING: &str = "SELECT 1";
