//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use carshop_core::shop::{Car, OrderView, Person};
use carshop_core::storage::FieldValue;
use chrono::NaiveDateTime;
use rusqlite::{types::Value, Row};

/// Format SQLite's `CURRENT_TIMESTAMP` produces.
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a SQLite row to a Person.
///
/// Expected columns: id, first_name, last_name, age
pub fn row_to_person(row: &Row) -> rusqlite::Result<Person> {
    person_at(row, 0)
}

/// Convert a SQLite row to a Car.
///
/// Expected columns: id, name, power, type, year
pub fn row_to_car(row: &Row) -> rusqlite::Result<Car> {
    car_at(row, 0)
}

/// Convert a joined row to an OrderView.
///
/// Expected columns: order id, order_date, the four person columns, then the
/// five car columns.
pub fn row_to_order_view(row: &Row) -> rusqlite::Result<OrderView> {
    let order_id: i64 = row.get(0)?;
    let order_date: String = row.get(1)?;

    Ok(OrderView {
        order_id,
        order_date: parse_timestamp(1, &order_date)?,
        person: person_at(row, 2)?,
        car: car_at(row, 6)?,
    })
}

fn person_at(row: &Row, offset: usize) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(offset)?,
        first_name: row.get(offset + 1)?,
        last_name: row.get(offset + 2)?,
        age: row.get(offset + 3)?,
    })
}

fn car_at(row: &Row, offset: usize) -> rusqlite::Result<Car> {
    Ok(Car {
        id: row.get(offset)?,
        name: row.get(offset + 1)?,
        power: row.get(offset + 2)?,
        kind: row.get(offset + 3)?,
        year: row.get(offset + 4)?,
    })
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp stored by SQLite.
fn parse_timestamp(column: usize, s: &str) -> rusqlite::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, SQLITE_TIMESTAMP_FORMAT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Convert an update parameter into a bindable SQLite value.
pub fn field_value_to_sql(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => Value::Text(text.clone()),
        FieldValue::Integer(int) => Value::Integer(*int),
    }
}
