//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `carshop_core::storage`. Whether a failure is a read or a write
//! failure depends on the statement that produced it, so every call site
//! states its [`Access`].

use carshop_core::storage::RepositoryError;

/// Kind of statement that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` → `WriteFailed` (missing person/car, or a
///   delete of a referenced row)
/// - `CannotOpen` → `ConnectionFailed`
/// - All other errors → `ReadFailed` or `WriteFailed` depending on `access`
fn map_rusqlite_error(
    err: &rusqlite::Error,
    access: Access,
    entity_type: &'static str,
) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY =>
        {
            RepositoryError::write_failed(
                entity_type,
                format!("Foreign key constraint violation: {err}"),
            )
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        _ => failed(access, entity_type, err.to_string()),
    }
}

fn failed(access: Access, entity_type: &'static str, reason: String) -> RepositoryError {
    match access {
        Access::Read => RepositoryError::read_failed(entity_type, reason),
        Access::Write => RepositoryError::write_failed(entity_type, reason),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    access: Access,
    entity_type: &'static str,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, access, entity_type)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => failed(access, entity_type, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    fn sqlite_failure(code: rusqlite::ErrorCode, extended_code: i32) -> tokio_rusqlite::Error {
        let sqlite_err = ffi::Error {
            code,
            extended_code,
        };
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None))
    }

    #[test]
    fn test_foreign_key_maps_to_write_failed() {
        let err = sqlite_failure(
            rusqlite::ErrorCode::ConstraintViolation,
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY,
        );

        let result = map_tokio_rusqlite_error(err, Access::Write, "Order");

        assert!(matches!(
            result,
            RepositoryError::WriteFailed {
                entity_type: "Order",
                ..
            }
        ));
    }

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let err = sqlite_failure(rusqlite::ErrorCode::CannotOpen, ffi::SQLITE_CANTOPEN);

        let result = map_tokio_rusqlite_error(err, Access::Read, "Person");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_read_access_maps_to_read_failed() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::InvalidColumnIndex(9));

        let result = map_tokio_rusqlite_error(err, Access::Read, "Car");

        assert!(matches!(
            result,
            RepositoryError::ReadFailed {
                entity_type: "Car",
                ..
            }
        ));
    }

    #[test]
    fn test_write_access_maps_to_write_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("disk full")));

        let result = map_tokio_rusqlite_error(err, Access::Write, "Person");

        assert!(matches!(result, RepositoryError::WriteFailed { .. }));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result =
            map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, Access::Read, "Order");

        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }
}
