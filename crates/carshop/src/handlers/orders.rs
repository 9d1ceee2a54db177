//! Order handlers.
//!
//! Reads return [`OrderView`]s, the order joined with its person and car.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use carshop_core::shop::{parse_person_id, CreateOrderRequest, OrderView};

use crate::{
    handlers::{error::{parse_id, parse_payload}, AppError},
    state::AppState,
};

/// Place an order (POST /api/orders).
///
/// A missing person or car is rejected by the store and surfaces as a 500.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = parse_payload(payload)?;

    let id = state.order_repo.create_order(&request).await?;

    tracing::info!(
        order_id = id,
        person_id = request.person_id,
        car_id = request.car_id,
        "Created new order"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Order created successfully", "id": id })),
    ))
}

/// List every order (GET /api/orders/get-all).
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderView>>, AppError> {
    Ok(Json(state.order_repo.list_orders().await?))
}

/// List the orders of one person (GET /api/orders/{person_id}).
///
/// The raw path segment is validated before the store is queried.
pub async fn list_orders_by_person(
    State(state): State<AppState>,
    Path(raw_person_id): Path<String>,
) -> Result<Json<Vec<OrderView>>, AppError> {
    let person_id = parse_person_id(&raw_person_id)?;

    Ok(Json(state.order_repo.list_orders_by_person(person_id).await?))
}

/// Delete an order by ID (DELETE /api/orders/{id}).
pub async fn delete_order(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(id)?;

    state.order_repo.delete_order(id).await?;

    tracing::info!(order_id = id, "Deleted order");

    Ok(StatusCode::OK)
}
