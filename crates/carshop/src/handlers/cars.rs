//! Car CRUD handlers.

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

use carshop_core::shop::{Car, CreateCarRequest, UpdateCarRequest};

use crate::{
    handlers::{error::{parse_id, parse_payload}, AppError},
    state::AppState,
};

/// Create a car (POST /api/car).
pub async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<CreateCarRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = parse_payload(payload)?;

    let id = state.car_repo.create_car(&request).await?;

    tracing::info!(car_id = id, name = %request.name, "Created new car");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Car added successfully", "id": id })),
    ))
}

/// List all cars (GET /api/car/get-all).
pub async fn list_cars(State(state): State<AppState>) -> Result<Json<Vec<Car>>, AppError> {
    Ok(Json(state.car_repo.list_cars().await?))
}

/// Get a single car by ID (GET /api/car/{id}).
pub async fn get_car(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Car>, AppError> {
    let id = parse_id(id)?;
    Ok(Json(state.car_repo.get_car(id).await?))
}

/// Partially update a car (PATCH /api/car/{id}).
///
/// Empty strings and a zero year are ignored, like absent fields.
pub async fn update_car(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateCarRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let update = parse_payload(payload)?;

    state.car_repo.update_car(id, &update).await?;

    tracing::info!(car_id = id, "Updated car");

    Ok(Json(json!({ "message": "Data updated successfully" })))
}

/// Delete a car by ID (DELETE /api/car/{id}).
pub async fn delete_car(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(id)?;

    state.car_repo.delete_car(id).await?;

    tracing::info!(car_id = id, "Deleted car");

    Ok(StatusCode::OK)
}
