//! Parameterized partial-update statements.
//!
//! Callers hand over the changes already in field-declaration order; the
//! builder only numbers them. Placeholders use the `?N` form understood by
//! SQLite, starting at `?1`, with the identity predicate numbered last.

use super::{RepositoryError, Result};

/// A value bound to a statement parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

/// One `column = value` assignment of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub column: &'static str,
    pub value: FieldValue,
}

impl FieldChange {
    pub fn text(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            value: FieldValue::Text(value.into()),
        }
    }

    pub fn integer(column: &'static str, value: i64) -> Self {
        Self {
            column,
            value: FieldValue::Integer(value),
        }
    }
}

/// Rejects an update that carries no field at all.
///
/// Backends call this before touching the store.
pub fn require_changes(changes: &[FieldChange]) -> Result<()> {
    if changes.is_empty() {
        return Err(RepositoryError::Validation(
            "No fields to update".to_string(),
        ));
    }
    Ok(())
}

/// A rendered `UPDATE` statement together with its bound parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub sql: String,
    /// Change values in placeholder order, followed by the identity.
    pub params: Vec<FieldValue>,
}

impl UpdateStatement {
    /// Builds `UPDATE <table> SET c1 = ?1, ... WHERE id = ?N+1`.
    ///
    /// Returns a validation error when `changes` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use carshop_core::storage::{FieldChange, UpdateStatement};
    ///
    /// let stmt = UpdateStatement::build(
    ///     "people",
    ///     &[FieldChange::text("last_name", "Lee"), FieldChange::integer("age", 30)],
    ///     4,
    /// )
    /// .unwrap();
    /// assert_eq!(stmt.sql, "UPDATE people SET last_name = ?1, age = ?2 WHERE id = ?3");
    /// ```
    pub fn build(table: &str, changes: &[FieldChange], id: i64) -> Result<Self> {
        require_changes(changes)?;

        let assignments: Vec<String> = changes
            .iter()
            .enumerate()
            .map(|(index, change)| format!("{} = ?{}", change.column, index + 1))
            .collect();

        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            assignments.join(", "),
            changes.len() + 1
        );

        let mut params: Vec<FieldValue> = changes.iter().map(|c| c.value.clone()).collect();
        params.push(FieldValue::Integer(id));

        Ok(Self { sql, params })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_change_numbers_id_second() {
        let stmt =
            UpdateStatement::build("cars", &[FieldChange::integer("year", 2021)], 8).unwrap();

        assert_eq!(stmt.sql, "UPDATE cars SET year = ?1 WHERE id = ?2");
        assert_eq!(
            stmt.params,
            vec![FieldValue::Integer(2021), FieldValue::Integer(8)]
        );
    }

    #[test]
    fn test_placeholders_are_sequential_without_gaps() {
        // The first present field is not the first declared one.
        let changes = [
            FieldChange::text("power", "350"),
            FieldChange::text("type", "coupe"),
            FieldChange::integer("year", 2022),
        ];

        let stmt = UpdateStatement::build("cars", &changes, 1).unwrap();

        assert_eq!(
            stmt.sql,
            "UPDATE cars SET power = ?1, type = ?2, year = ?3 WHERE id = ?4"
        );
        assert_eq!(stmt.params.len(), 4);
        assert_eq!(stmt.params[3], FieldValue::Integer(1));
    }

    #[test]
    fn test_preserves_given_order() {
        let changes = [
            FieldChange::text("first_name", "Ana"),
            FieldChange::text("last_name", "Lee"),
            FieldChange::integer("age", 30),
        ];

        let stmt = UpdateStatement::build("people", &changes, 2).unwrap();

        assert_eq!(
            stmt.sql,
            "UPDATE people SET first_name = ?1, last_name = ?2, age = ?3 WHERE id = ?4"
        );
        assert_eq!(
            stmt.params,
            vec![
                FieldValue::Text("Ana".to_string()),
                FieldValue::Text("Lee".to_string()),
                FieldValue::Integer(30),
                FieldValue::Integer(2),
            ]
        );
    }

    #[test]
    fn test_no_changes_is_validation_error() {
        let result = UpdateStatement::build("people", &[], 1);

        assert_eq!(
            result,
            Err(RepositoryError::Validation(
                "No fields to update".to_string()
            ))
        );
    }
}
