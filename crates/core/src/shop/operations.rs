//! Input validation performed before any store call.

use crate::storage::RepositoryError;

/// Parses a person identity taken from a request path.
///
/// Blank or non-numeric input is a validation error, so callers can reject
/// it without querying the store.
pub fn parse_person_id(raw: &str) -> Result<i64, RepositoryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RepositoryError::Validation(
            "person id is required".to_string(),
        ));
    }

    trimmed.parse().map_err(|_| {
        RepositoryError::Validation(format!("person id must be an integer, got '{trimmed}'"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        assert_eq!(parse_person_id("42"), Ok(42));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_person_id(" 7 "), Ok(7));
    }

    #[test]
    fn test_blank_id_is_validation_error() {
        assert_eq!(
            parse_person_id("   "),
            Err(RepositoryError::Validation(
                "person id is required".to_string()
            ))
        );
        assert!(matches!(
            parse_person_id(""),
            Err(RepositoryError::Validation(_))
        ));
    }

    #[test]
    fn test_non_numeric_id_is_validation_error() {
        assert!(matches!(
            parse_person_id("abc"),
            Err(RepositoryError::Validation(_))
        ));
    }
}
