use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Malformed or missing input, detected before touching the store.
    #[error("{0}")]
    Validation(String),
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Failed to write {entity_type}: {reason}")]
    WriteFailed {
        entity_type: &'static str,
        reason: String,
    },
    #[error("Failed to read {entity_type}: {reason}")]
    ReadFailed {
        entity_type: &'static str,
        reason: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

impl RepositoryError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn write_failed(entity_type: &'static str, reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            entity_type,
            reason: reason.into(),
        }
    }

    pub fn read_failed(entity_type: &'static str, reason: impl Into<String>) -> Self {
        Self::ReadFailed {
            entity_type,
            reason: reason.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_validation_display() {
        let error = RepositoryError::Validation("No fields to update".to_string());
        assert_eq!(error.to_string(), "No fields to update");
    }

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::not_found("Car", 12);
        assert_eq!(error.to_string(), "Car not found: 12");
    }

    #[test]
    fn test_repository_error_write_failed_display() {
        let error = RepositoryError::write_failed("Order", "FOREIGN KEY constraint failed");
        assert_eq!(
            error.to_string(),
            "Failed to write Order: FOREIGN KEY constraint failed"
        );
    }

    #[test]
    fn test_repository_error_read_failed_display() {
        let error = RepositoryError::read_failed("Person", "no such table: people");
        assert_eq!(error.to_string(), "Failed to read Person: no such table: people");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("database is locked".to_string());
        assert_eq!(error.to_string(), "Connection failed: database is locked");
    }
}
