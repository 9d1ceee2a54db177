use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A customer who can place orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// A car available for ordering.
///
/// `power` is kept as free text (e.g. `"300"` or `"300hp"`); it is stored
/// in a TEXT column and never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub power: String,
    /// Short category code such as `suv` or `sedan`.
    #[serde(rename = "type")]
    pub kind: String,
    pub year: i32,
}

/// A stored order row binding one person to one car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub person_id: i64,
    pub car_id: i64,
    /// Assigned by the store at insert time (UTC).
    pub order_date: NaiveDateTime,
}

/// Read-only view of an order joined with its person and car.
///
/// Never persisted; computed by joining `orders`, `people` and `cars`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderView {
    pub order_id: i64,
    pub order_date: NaiveDateTime,
    pub person: Person,
    pub car: Car,
}

impl OrderView {
    /// Builds the view for `order`, or `None` when the order does not
    /// reference the given person and car.
    pub fn join(order: &Order, person: &Person, car: &Car) -> Option<Self> {
        if order.person_id != person.id || order.car_id != car.id {
            return None;
        }

        Some(Self {
            order_id: order.id,
            order_date: order.order_date,
            person: person.clone(),
            car: car.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ana() -> Person {
        Person {
            id: 1,
            first_name: "Ana".to_string(),
            last_name: "Lee".to_string(),
            age: 30,
        }
    }

    fn x1() -> Car {
        Car {
            id: 7,
            name: "X1".to_string(),
            power: "300".to_string(),
            kind: "suv".to_string(),
            year: 2020,
        }
    }

    fn order(person_id: i64, car_id: i64) -> Order {
        Order {
            id: 3,
            person_id,
            car_id,
            order_date: NaiveDate::from_ymd_opt(2024, 6, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_car_type_field_serializes_as_type() {
        let json = serde_json::to_value(x1()).unwrap();

        assert_eq!(json["type"], "suv");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_join_matching_references() {
        let view = OrderView::join(&order(1, 7), &ana(), &x1()).unwrap();

        assert_eq!(view.order_id, 3);
        assert_eq!(view.person, ana());
        assert_eq!(view.car, x1());
    }

    #[test]
    fn test_join_rejects_mismatched_person() {
        assert!(OrderView::join(&order(2, 7), &ana(), &x1()).is_none());
    }

    #[test]
    fn test_join_rejects_mismatched_car() {
        assert!(OrderView::join(&order(1, 8), &ana(), &x1()).is_none());
    }
}
