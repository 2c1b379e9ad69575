//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `contactform_core::storage`.

use contactform_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - Constraint violations -> `RepositoryError::InvalidData`
/// - Unreadable column values -> `RepositoryError::InvalidData`
/// - Connection errors -> `RepositoryError::ConnectionFailed`
/// - All other errors -> `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, entity_type: &'static str) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RepositoryError::InvalidData(format!("Constraint violation for {entity_type}: {err}"))
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::FromSqlConversionFailure(..) => {
            RepositoryError::InvalidData(format!("Unreadable {entity_type} row: {err}"))
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// Extracts the inner `rusqlite::Error` if present, otherwise maps to a
/// generic `QueryFailed` error.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    #[test]
    fn test_not_null_constraint_maps_to_invalid_data() {
        let sqlite_err = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code: ffi::SQLITE_CONSTRAINT_NOTNULL,
        };
        let rusqlite_err = rusqlite::Error::SqliteFailure(sqlite_err, None);
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite_err);

        let result = map_tokio_rusqlite_error(err, "Submission");

        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let sqlite_err = rusqlite::ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        let result = map_tokio_rusqlite_error(err, "Submission");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "Submission");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_unreadable_row_maps_to_invalid_data() {
        let conversion = rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::other("bad timestamp")),
        );

        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::Rusqlite(conversion), "Submission");

        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_no_rows_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error(err, "Submission");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "Submission");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
