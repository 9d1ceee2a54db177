use async_trait::async_trait;

use crate::shop::{
    Car, CreateCarRequest, CreateOrderRequest, CreatePersonRequest, OrderView, Person,
    UpdateCarRequest, UpdatePersonRequest,
};

use super::Result;

/// Repository for person operations.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Inserts a person and returns the store-assigned ID.
    async fn create_person(&self, person: &CreatePersonRequest) -> Result<i64>;

    /// Lists every person. An empty table yields an empty vector.
    async fn list_people(&self) -> Result<Vec<Person>>;

    /// Gets a person by ID, failing with `NotFound` when absent.
    async fn get_person(&self, id: i64) -> Result<Person>;

    /// Writes the present fields of `update`.
    ///
    /// Fails with `Validation` before touching the store when no field is
    /// present.
    async fn update_person(&self, id: i64, update: &UpdatePersonRequest) -> Result<()>;

    /// Deletes a person by ID.
    async fn delete_person(&self, id: i64) -> Result<()>;
}

/// Repository for car operations.
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Inserts a car and returns the store-assigned ID.
    async fn create_car(&self, car: &CreateCarRequest) -> Result<i64>;

    /// Lists every car.
    async fn list_cars(&self) -> Result<Vec<Car>>;

    /// Gets a car by ID, failing with `NotFound` when absent.
    async fn get_car(&self, id: i64) -> Result<Car>;

    /// Writes the non-zero fields of `update`.
    async fn update_car(&self, id: i64, update: &UpdateCarRequest) -> Result<()>;

    /// Deletes a car by ID.
    async fn delete_car(&self, id: i64) -> Result<()>;
}

/// Repository for orders and their joined read views.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts an order and returns the store-assigned ID.
    ///
    /// The store rejects references to missing people or cars.
    async fn create_order(&self, order: &CreateOrderRequest) -> Result<i64>;

    /// Lists every order joined with its person and car.
    async fn list_orders(&self) -> Result<Vec<OrderView>>;

    /// Lists the orders of one person, failing with `NotFound` when there
    /// are none.
    async fn list_orders_by_person(&self, person_id: i64) -> Result<Vec<OrderView>>;

    /// Deletes an order by ID.
    async fn delete_order(&self, id: i64) -> Result<()>;
}
