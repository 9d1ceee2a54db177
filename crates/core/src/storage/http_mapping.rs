//! Pure functions for mapping repository errors to HTTP responses.
//!
//! Following the Functional Core pattern - no side effects, no I/O.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `WriteFailed` -> 500 (Internal Server Error)
/// - `ReadFailed` -> 500 (Internal Server Error)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
///
/// # Examples
///
/// ```
/// use carshop_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::not_found("Person", 7);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::Validation(_) => 400,
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::WriteFailed { .. } => 500,
        RepositoryError::ReadFailed { .. } => 500,
        RepositoryError::ConnectionFailed(_) => 503,
    }
}

/// Message safe to show to API clients.
///
/// Store failures collapse to a generic description per category; the
/// underlying driver message never leaves the server.
pub fn repository_error_public_message(error: &RepositoryError) -> String {
    match error {
        RepositoryError::Validation(_) | RepositoryError::NotFound { .. } => error.to_string(),
        RepositoryError::WriteFailed { .. } => "Failed to write to the database".to_string(),
        RepositoryError::ReadFailed { .. } => "Failed to read from the database".to_string(),
        RepositoryError::ConnectionFailed(_) => "Database unavailable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let error = RepositoryError::Validation("No fields to update".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::not_found("Order", 5);
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_store_failures_map_to_500() {
        let write = RepositoryError::write_failed("Person", "disk I/O error");
        let read = RepositoryError::read_failed("Person", "disk I/O error");
        assert_eq!(repository_error_to_status_code(&write), 500);
        assert_eq!(repository_error_to_status_code(&read), 500);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("closed".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_public_message_hides_store_detail() {
        let error = RepositoryError::write_failed("Order", "FOREIGN KEY constraint failed");
        let message = repository_error_public_message(&error);

        assert_eq!(message, "Failed to write to the database");
        assert!(!message.contains("FOREIGN KEY"));
    }

    #[test]
    fn test_public_message_keeps_client_errors() {
        let error = RepositoryError::not_found("Car", 3);
        assert_eq!(repository_error_public_message(&error), "Car not found: 3");
    }
}
