//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;

use contactform_core::submission::Submission;

/// Convert a SQLite row to a Submission.
///
/// Expected columns: id, name, email, subject, message, submitted_at
pub fn row_to_submission(row: &Row) -> rusqlite::Result<Submission> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let email: String = row.get(2)?;
    let subject: Option<String> = row.get(3)?;
    let message: String = row.get(4)?;
    let submitted_at: String = row.get(5)?;

    Ok(Submission {
        id,
        name,
        email,
        subject,
        message,
        submitted_at: parse_datetime(&submitted_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Format a DateTime<Utc> for SQLite storage.
///
/// Fixed-width RFC 3339 in UTC, so text ordering matches time ordering.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
