//! API request types for people, cars and orders.
//!
//! Pure data plus the logic that turns a sparse update payload into an
//! ordered list of column changes.

use serde::{Deserialize, Serialize};

use super::types::{Car, Person};
use crate::storage::FieldChange;

/// Request payload for creating a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePersonRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl CreatePersonRequest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
        }
    }

    /// Materializes the stored person once the store has assigned `id`.
    pub fn into_person(self, id: i64) -> Person {
        Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            age: self.age,
        }
    }
}

/// Request payload for a partial person update.
///
/// Each field is independently present or absent; `Some("")` and `Some(0)`
/// are real values and will be written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePersonRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl UpdatePersonRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Present fields as column changes, in the order
    /// `first_name`, `last_name`, `age`.
    pub fn changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        if let Some(first_name) = &self.first_name {
            changes.push(FieldChange::text("first_name", first_name));
        }
        if let Some(last_name) = &self.last_name {
            changes.push(FieldChange::text("last_name", last_name));
        }
        if let Some(age) = self.age {
            changes.push(FieldChange::integer("age", age.into()));
        }
        changes
    }

    /// Apply present fields to an existing person.
    pub fn apply_to(&self, person: &mut Person) {
        if let Some(first_name) = &self.first_name {
            person.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            person.last_name = last_name.clone();
        }
        if let Some(age) = self.age {
            person.age = age;
        }
    }
}

/// Request payload for creating a car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCarRequest {
    pub name: String,
    pub power: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year: i32,
}

impl CreateCarRequest {
    pub fn new(
        name: impl Into<String>,
        power: impl Into<String>,
        kind: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            name: name.into(),
            power: power.into(),
            kind: kind.into(),
            year,
        }
    }

    pub fn into_car(self, id: i64) -> Car {
        Car {
            id,
            name: self.name,
            power: self.power,
            kind: self.kind,
            year: self.year,
        }
    }
}

/// Request payload for a partial car update.
///
/// Zero values count as "not supplied": an empty string or a year of `0`
/// is skipped exactly like an absent field. Clearing `power` or setting
/// `year` to `0` through an update is therefore impossible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCarRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl UpdateCarRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_power(mut self, power: impl Into<String>) -> Self {
        self.power = Some(power.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    fn power(&self) -> Option<&str> {
        non_empty(&self.power)
    }

    fn kind(&self) -> Option<&str> {
        non_empty(&self.kind)
    }

    fn year(&self) -> Option<i32> {
        self.year.filter(|year| *year != 0)
    }

    /// Non-zero fields as column changes, in the order
    /// `name`, `power`, `type`, `year`.
    pub fn changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        if let Some(name) = self.name() {
            changes.push(FieldChange::text("name", name));
        }
        if let Some(power) = self.power() {
            changes.push(FieldChange::text("power", power));
        }
        if let Some(kind) = self.kind() {
            changes.push(FieldChange::text("type", kind));
        }
        if let Some(year) = self.year() {
            changes.push(FieldChange::integer("year", year.into()));
        }
        changes
    }

    /// Apply non-zero fields to an existing car.
    pub fn apply_to(&self, car: &mut Car) {
        if let Some(name) = self.name() {
            car.name = name.to_string();
        }
        if let Some(power) = self.power() {
            car.power = power.to_string();
        }
        if let Some(kind) = self.kind() {
            car.kind = kind.to_string();
        }
        if let Some(year) = self.year() {
            car.year = year;
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Request payload for placing an order.
///
/// Accepts `user_id` as an alias of `person_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(alias = "user_id")]
    pub person_id: i64,
    pub car_id: i64,
}

impl CreateOrderRequest {
    pub fn new(person_id: i64, car_id: i64) -> Self {
        Self { person_id, car_id }
    }
}
