//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Partial updates are rendered at runtime by
//! `carshop_core::storage::UpdateStatement`.

/// Enables foreign-key enforcement; SQLite keeps it off per connection.
pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON;";

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- People table
CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT,
    last_name TEXT,
    age INTEGER
);

-- Cars table
CREATE TABLE IF NOT EXISTS cars (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    power TEXT,
    type TEXT,
    year INTEGER
);

-- Orders table
CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    car_id INTEGER NOT NULL,
    order_date TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (user_id) REFERENCES people(id),
    FOREIGN KEY (car_id) REFERENCES cars(id)
);

CREATE INDEX IF NOT EXISTS idx_orders_user_id ON orders(user_id);
"#;

pub const PEOPLE_TABLE: &str = "people";
pub const CARS_TABLE: &str = "cars";

// Person queries
pub const INSERT_PERSON: &str = r#"
INSERT INTO people (first_name, last_name, age)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_PEOPLE: &str = r#"
SELECT id, first_name, last_name, age
FROM people
"#;

pub const SELECT_PERSON_BY_ID: &str = r#"
SELECT id, first_name, last_name, age
FROM people
WHERE id = ?1
"#;

pub const DELETE_PERSON: &str = r#"
DELETE FROM people
WHERE id = ?1
"#;

// Car queries
pub const INSERT_CAR: &str = r#"
INSERT INTO cars (name, power, type, year)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_CARS: &str = r#"
SELECT id, name, power, type, year
FROM cars
"#;

pub const SELECT_CAR_BY_ID: &str = r#"
SELECT id, name, power, type, year
FROM cars
WHERE id = ?1
"#;

pub const DELETE_CAR: &str = r#"
DELETE FROM cars
WHERE id = ?1
"#;

// Order queries
pub const INSERT_ORDER: &str = r#"
INSERT INTO orders (user_id, car_id)
VALUES (?1, ?2)
"#;

pub const SELECT_ORDER_VIEWS: &str = r#"
SELECT o.id, o.order_date,
       p.id, p.first_name, p.last_name, p.age,
       c.id, c.name, c.power, c.type, c.year
FROM orders o
INNER JOIN people p ON o.user_id = p.id
INNER JOIN cars c ON o.car_id = c.id
"#;

pub const SELECT_ORDER_VIEWS_BY_PERSON: &str = r#"
SELECT o.id, o.order_date,
       p.id, p.first_name, p.last_name, p.age,
       c.id, c.name, c.power, c.type, c.year
FROM orders o
INNER JOIN people p ON o.user_id = p.id
INNER JOIN cars c ON o.car_id = c.id
WHERE o.user_id = ?1
"#;

pub const DELETE_ORDER: &str = r#"
DELETE FROM orders
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS people"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS cars"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS orders"));
        assert!(CREATE_TABLES.contains("CREATE INDEX IF NOT EXISTS"));
    }

    #[test]
    fn test_orders_reference_people_and_cars() {
        assert!(CREATE_TABLES.contains("REFERENCES people(id)"));
        assert!(CREATE_TABLES.contains("REFERENCES cars(id)"));
        assert!(CREATE_TABLES.contains("DEFAULT CURRENT_TIMESTAMP"));
    }

    #[test]
    fn test_order_views_use_inner_joins() {
        assert_eq!(SELECT_ORDER_VIEWS.matches("INNER JOIN").count(), 2);
        assert!(SELECT_ORDER_VIEWS_BY_PERSON.contains("WHERE o.user_id = ?1"));
    }
}
