use super::{RepositoryError, Result};

/// Classifies the affected-row count of a keyed update or delete.
///
/// Zero rows means no row carried the identity, which is `NotFound`; store
/// errors never reach this function.
pub fn classify_affected_rows(rows: usize, entity_type: &'static str, id: i64) -> Result<()> {
    if rows == 0 {
        Err(RepositoryError::not_found(entity_type, id))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rows_is_not_found() {
        assert_eq!(
            classify_affected_rows(0, "Person", 9),
            Err(RepositoryError::NotFound {
                entity_type: "Person",
                id: "9".to_string(),
            })
        );
    }

    #[test]
    fn test_affected_rows_is_success() {
        assert_eq!(classify_affected_rows(1, "Car", 2), Ok(()));
    }
}
