//! SQLite repository implementation.
//!
//! Implements the repository traits from `carshop_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::{params_from_iter, types::Value, Row};
use tokio_rusqlite::Connection;

use carshop_core::shop::{
    Car, CreateCarRequest, CreateOrderRequest, CreatePersonRequest, OrderView, Person,
    UpdateCarRequest, UpdatePersonRequest,
};
use carshop_core::storage::{
    classify_affected_rows, CarRepository, FieldChange, OrderRepository, PersonRepository,
    RepositoryError, Result, UpdateStatement,
};

use super::conversions::{field_value_to_sql, row_to_car, row_to_order_view, row_to_person};
use super::error::{map_tokio_rusqlite_error, Access};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Maps a failed statement to a `RepositoryError` and logs the cause.
fn store_error(
    err: tokio_rusqlite::Error,
    access: Access,
    entity_type: &'static str,
) -> RepositoryError {
    let mapped = map_tokio_rusqlite_error(err, access, entity_type);
    tracing::error!(entity_type, ?access, error = %mapped, "SQLite statement failed");
    mapped
}

type RowMapper<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

/// SQLite-based repository implementation.
///
/// Cloning is cheap: clones share the same background connection, which
/// serializes every statement.
#[derive(Clone)]
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and ensures the schema.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::info!(path, "SQLite database ready");

        Ok(Self { conn })
    }

    /// Creates a repository over an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Enables foreign keys and creates missing tables.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(format!("Schema setup failed: {e}")))
    }

    /// Runs an INSERT and returns the new row ID.
    async fn insert(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        entity_type: &'static str,
    ) -> Result<i64> {
        self.conn
            .call(move |conn| {
                conn.execute(sql, params_from_iter(params))
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| store_error(e, Access::Write, entity_type))
    }

    /// Runs every row of a query through `mapper`.
    ///
    /// The statement and its cursor are dropped inside the closure, on the
    /// error path as well.
    async fn query_all<T: Send + 'static>(
        &self,
        sql: &'static str,
        params: Vec<Value>,
        mapper: RowMapper<T>,
        entity_type: &'static str,
    ) -> Result<Vec<T>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(params_from_iter(params), mapper)
                    .map_err(wrap_err)?;

                let mut results = Vec::new();
                for row_result in rows {
                    results.push(row_result.map_err(wrap_err)?);
                }
                Ok(results)
            })
            .await
            .map_err(|e| store_error(e, Access::Read, entity_type))
    }

    /// Fetches the single row keyed by `id`, or `NotFound`.
    async fn query_by_id<T: Send + 'static>(
        &self,
        sql: &'static str,
        id: i64,
        mapper: RowMapper<T>,
        entity_type: &'static str,
    ) -> Result<T> {
        let found = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
                match stmt.query_row([id], mapper) {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| store_error(e, Access::Read, entity_type))?;

        found.ok_or_else(|| RepositoryError::not_found(entity_type, id))
    }

    /// Runs a statement keyed by `id` and classifies the affected rows.
    async fn execute_keyed(
        &self,
        sql: String,
        params: Vec<Value>,
        entity_type: &'static str,
        id: i64,
    ) -> Result<()> {
        let rows = self
            .conn
            .call(move |conn| {
                conn.execute(&sql, params_from_iter(params))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| store_error(e, Access::Write, entity_type))?;

        classify_affected_rows(rows, entity_type, id)
    }

    /// Builds and runs a partial update.
    ///
    /// An empty change set fails here, before any statement is sent.
    async fn update_keyed(
        &self,
        table: &'static str,
        changes: &[FieldChange],
        entity_type: &'static str,
        id: i64,
    ) -> Result<()> {
        let statement = UpdateStatement::build(table, changes, id)?;
        let params: Vec<Value> = statement.params.iter().map(field_value_to_sql).collect();

        self.execute_keyed(statement.sql, params, entity_type, id)
            .await
    }

    async fn delete_keyed(
        &self,
        sql: &'static str,
        entity_type: &'static str,
        id: i64,
    ) -> Result<()> {
        self.execute_keyed(sql.to_string(), vec![Value::Integer(id)], entity_type, id)
            .await
    }
}

// ============================================================================
// PersonRepository implementation
// ============================================================================

#[async_trait]
impl PersonRepository for SqliteRepository {
    async fn create_person(&self, person: &CreatePersonRequest) -> Result<i64> {
        let params = vec![
            Value::Text(person.first_name.clone()),
            Value::Text(person.last_name.clone()),
            Value::Integer(person.age.into()),
        ];

        self.insert(schema::INSERT_PERSON, params, "Person").await
    }

    async fn list_people(&self) -> Result<Vec<Person>> {
        self.query_all(schema::SELECT_PEOPLE, Vec::new(), row_to_person, "Person")
            .await
    }

    async fn get_person(&self, id: i64) -> Result<Person> {
        self.query_by_id(schema::SELECT_PERSON_BY_ID, id, row_to_person, "Person")
            .await
    }

    async fn update_person(&self, id: i64, update: &UpdatePersonRequest) -> Result<()> {
        self.update_keyed(schema::PEOPLE_TABLE, &update.changes(), "Person", id)
            .await
    }

    async fn delete_person(&self, id: i64) -> Result<()> {
        self.delete_keyed(schema::DELETE_PERSON, "Person", id).await
    }
}

// ============================================================================
// CarRepository implementation
// ============================================================================

#[async_trait]
impl CarRepository for SqliteRepository {
    async fn create_car(&self, car: &CreateCarRequest) -> Result<i64> {
        let params = vec![
            Value::Text(car.name.clone()),
            Value::Text(car.power.clone()),
            Value::Text(car.kind.clone()),
            Value::Integer(car.year.into()),
        ];

        self.insert(schema::INSERT_CAR, params, "Car").await
    }

    async fn list_cars(&self) -> Result<Vec<Car>> {
        self.query_all(schema::SELECT_CARS, Vec::new(), row_to_car, "Car")
            .await
    }

    async fn get_car(&self, id: i64) -> Result<Car> {
        self.query_by_id(schema::SELECT_CAR_BY_ID, id, row_to_car, "Car")
            .await
    }

    async fn update_car(&self, id: i64, update: &UpdateCarRequest) -> Result<()> {
        self.update_keyed(schema::CARS_TABLE, &update.changes(), "Car", id)
            .await
    }

    async fn delete_car(&self, id: i64) -> Result<()> {
        self.delete_keyed(schema::DELETE_CAR, "Car", id).await
    }
}

// ============================================================================
// OrderRepository implementation
// ============================================================================

#[async_trait]
impl OrderRepository for SqliteRepository {
    async fn create_order(&self, order: &CreateOrderRequest) -> Result<i64> {
        let params = vec![Value::Integer(order.person_id), Value::Integer(order.car_id)];

        self.insert(schema::INSERT_ORDER, params, "Order").await
    }

    async fn list_orders(&self) -> Result<Vec<OrderView>> {
        self.query_all(
            schema::SELECT_ORDER_VIEWS,
            Vec::new(),
            row_to_order_view,
            "Order",
        )
        .await
    }

    async fn list_orders_by_person(&self, person_id: i64) -> Result<Vec<OrderView>> {
        let orders = self
            .query_all(
                schema::SELECT_ORDER_VIEWS_BY_PERSON,
                vec![Value::Integer(person_id)],
                row_to_order_view,
                "Order",
            )
            .await?;

        if orders.is_empty() {
            return Err(RepositoryError::not_found(
                "Order",
                format!("person_id={person_id}"),
            ));
        }
        Ok(orders)
    }

    async fn delete_order(&self, id: i64) -> Result<()> {
        self.delete_keyed(schema::DELETE_ORDER, "Order", id).await
    }
}
