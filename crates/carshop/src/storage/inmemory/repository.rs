//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use tokio::sync::RwLock;

use carshop_core::shop::{
    Car, CreateCarRequest, CreateOrderRequest, CreatePersonRequest, Order, OrderView, Person,
    UpdateCarRequest, UpdatePersonRequest,
};
use carshop_core::storage::{
    classify_affected_rows, require_changes, CarRepository, OrderRepository, PersonRepository,
    RepositoryError, Result,
};

#[derive(Debug, Default)]
struct Tables {
    people: BTreeMap<i64, Person>,
    cars: BTreeMap<i64, Car>,
    orders: BTreeMap<i64, Order>,
    last_person_id: i64,
    last_car_id: i64,
    last_order_id: i64,
}

impl Tables {
    /// Inner join of every order in `orders` with its person and car.
    fn views<'a>(&self, orders: impl Iterator<Item = &'a Order>) -> Vec<OrderView> {
        orders
            .filter_map(|order| {
                let person = self.people.get(&order.person_id)?;
                let car = self.cars.get(&order.car_id)?;
                OrderView::join(order, person, car)
            })
            .collect()
    }

    fn is_person_referenced(&self, person_id: i64) -> bool {
        self.orders.values().any(|o| o.person_id == person_id)
    }

    fn is_car_referenced(&self, car_id: i64) -> bool {
        self.orders.values().any(|o| o.car_id == car_id)
    }
}

fn foreign_key_violation(entity_type: &'static str) -> RepositoryError {
    RepositoryError::write_failed(entity_type, "Foreign key constraint violation")
}

/// In-memory storage backend.
///
/// Clones share the same tables. IDs are never reused, matching
/// `AUTOINCREMENT` in the SQLite schema.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryRepository {
    async fn create_person(&self, person: &CreatePersonRequest) -> Result<i64> {
        let mut tables = self.tables.write().await;
        tables.last_person_id += 1;
        let id = tables.last_person_id;
        tables.people.insert(id, person.clone().into_person(id));
        Ok(id)
    }

    async fn list_people(&self) -> Result<Vec<Person>> {
        let tables = self.tables.read().await;
        Ok(tables.people.values().cloned().collect())
    }

    async fn get_person(&self, id: i64) -> Result<Person> {
        let tables = self.tables.read().await;
        tables
            .people
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Person", id))
    }

    async fn update_person(&self, id: i64, update: &UpdatePersonRequest) -> Result<()> {
        require_changes(&update.changes())?;

        let mut tables = self.tables.write().await;
        let affected = match tables.people.get_mut(&id) {
            Some(person) => {
                update.apply_to(person);
                1
            }
            None => 0,
        };
        classify_affected_rows(affected, "Person", id)
    }

    async fn delete_person(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.is_person_referenced(id) {
            return Err(foreign_key_violation("Person"));
        }
        let affected = usize::from(tables.people.remove(&id).is_some());
        classify_affected_rows(affected, "Person", id)
    }
}

#[async_trait]
impl CarRepository for InMemoryRepository {
    async fn create_car(&self, car: &CreateCarRequest) -> Result<i64> {
        let mut tables = self.tables.write().await;
        tables.last_car_id += 1;
        let id = tables.last_car_id;
        tables.cars.insert(id, car.clone().into_car(id));
        Ok(id)
    }

    async fn list_cars(&self) -> Result<Vec<Car>> {
        let tables = self.tables.read().await;
        Ok(tables.cars.values().cloned().collect())
    }

    async fn get_car(&self, id: i64) -> Result<Car> {
        let tables = self.tables.read().await;
        tables
            .cars
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Car", id))
    }

    async fn update_car(&self, id: i64, update: &UpdateCarRequest) -> Result<()> {
        require_changes(&update.changes())?;

        let mut tables = self.tables.write().await;
        let affected = match tables.cars.get_mut(&id) {
            Some(car) => {
                update.apply_to(car);
                1
            }
            None => 0,
        };
        classify_affected_rows(affected, "Car", id)
    }

    async fn delete_car(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.is_car_referenced(id) {
            return Err(foreign_key_violation("Car"));
        }
        let affected = usize::from(tables.cars.remove(&id).is_some());
        classify_affected_rows(affected, "Car", id)
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepository {
    async fn create_order(&self, order: &CreateOrderRequest) -> Result<i64> {
        let mut tables = self.tables.write().await;
        if !tables.people.contains_key(&order.person_id) || !tables.cars.contains_key(&order.car_id)
        {
            return Err(foreign_key_violation("Order"));
        }

        tables.last_order_id += 1;
        let id = tables.last_order_id;
        tables.orders.insert(
            id,
            Order {
                id,
                person_id: order.person_id,
                car_id: order.car_id,
                order_date: Utc::now().naive_utc().trunc_subsecs(0),
            },
        );
        Ok(id)
    }

    async fn list_orders(&self) -> Result<Vec<OrderView>> {
        let tables = self.tables.read().await;
        Ok(tables.views(tables.orders.values()))
    }

    async fn list_orders_by_person(&self, person_id: i64) -> Result<Vec<OrderView>> {
        let tables = self.tables.read().await;
        let orders = tables.views(
            tables
                .orders
                .values()
                .filter(|order| order.person_id == person_id),
        );

        if orders.is_empty() {
            return Err(RepositoryError::not_found(
                "Order",
                format!("person_id={person_id}"),
            ));
        }
        Ok(orders)
    }

    async fn delete_order(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        let affected = usize::from(tables.orders.remove(&id).is_some());
        classify_affected_rows(affected, "Order", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed(repo: &InMemoryRepository) -> (i64, i64) {
        let person_id = repo
            .create_person(&CreatePersonRequest::new("Ana", "Lee", 30))
            .await
            .unwrap();
        let car_id = repo
            .create_car(&CreateCarRequest::new("X1", "300", "suv", 2020))
            .await
            .unwrap();
        (person_id, car_id)
    }

    // ==================== Person Tests ====================

    #[tokio::test]
    async fn test_person_create_and_get() {
        let repo = InMemoryRepository::new();
        let (person_id, _) = seed(&repo).await;

        let person = repo.get_person(person_id).await.unwrap();

        assert_eq!(person, CreatePersonRequest::new("Ana", "Lee", 30).into_person(person_id));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = InMemoryRepository::new();
        let (first, _) = seed(&repo).await;
        repo.delete_person(first).await.unwrap();

        let second = repo
            .create_person(&CreatePersonRequest::new("Bo", "Ng", 22))
            .await
            .unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_person_get_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.get_person(1).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_person_update_without_fields() {
        let repo = InMemoryRepository::new();
        let (person_id, _) = seed(&repo).await;

        let result = repo
            .update_person(person_id, &UpdatePersonRequest::new())
            .await;

        assert!(matches!(result, Err(RepositoryError::Validation(_))));
    }

    #[tokio::test]
    async fn test_person_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo
            .update_person(3, &UpdatePersonRequest::new().with_first_name("Eve"))
            .await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_person_delete_referenced_is_rejected() {
        let repo = InMemoryRepository::new();
        let (person_id, car_id) = seed(&repo).await;
        repo.create_order(&CreateOrderRequest::new(person_id, car_id))
            .await
            .unwrap();

        let result = repo.delete_person(person_id).await;

        assert!(matches!(result, Err(RepositoryError::WriteFailed { .. })));
        assert!(repo.get_person(person_id).await.is_ok());
    }

    // ==================== Car Tests ====================

    #[tokio::test]
    async fn test_list_cars_empty() {
        let repo = InMemoryRepository::new();
        assert!(repo.list_cars().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_car_update_skips_zero_values() {
        let repo = InMemoryRepository::new();
        let (_, car_id) = seed(&repo).await;

        repo.update_car(car_id, &UpdateCarRequest::new().with_power("").with_year(2021))
            .await
            .unwrap();

        let car = repo.get_car(car_id).await.unwrap();
        assert_eq!(car.power, "300");
        assert_eq!(car.year, 2021);
    }

    #[tokio::test]
    async fn test_car_delete_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.delete_car(8).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    // ==================== Order Tests ====================

    #[tokio::test]
    async fn test_order_with_missing_car_is_rejected() {
        let repo = InMemoryRepository::new();
        let (person_id, _) = seed(&repo).await;

        let result = repo
            .create_order(&CreateOrderRequest::new(person_id, 42))
            .await;

        assert!(matches!(result, Err(RepositoryError::WriteFailed { .. })));
    }

    #[tokio::test]
    async fn test_orders_by_person_lifecycle() {
        let repo = InMemoryRepository::new();
        let (person_id, car_id) = seed(&repo).await;
        let order_id = repo
            .create_order(&CreateOrderRequest::new(person_id, car_id))
            .await
            .unwrap();

        let orders = repo.list_orders_by_person(person_id).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_id, order_id);
        assert_eq!(orders[0].car.name, "X1");

        repo.delete_order(order_id).await.unwrap();

        let result = repo.list_orders_by_person(person_id).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
        assert!(repo.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_order_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.delete_order(5).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }
}
