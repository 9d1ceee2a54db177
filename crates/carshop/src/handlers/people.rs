//! Person CRUD handlers.

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

use carshop_core::shop::{CreatePersonRequest, Person, UpdatePersonRequest};

use crate::{
    handlers::{error::{parse_id, parse_payload}, AppError},
    state::AppState,
};

/// Create a person (POST /api/user).
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = parse_payload(payload)?;

    let id = state.person_repo.create_person(&request).await?;

    tracing::info!(person_id = id, "Created new person");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Person added successfully", "id": id })),
    ))
}

/// List all people (GET /api/user/get-all).
pub async fn list_people(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    Ok(Json(state.person_repo.list_people().await?))
}

/// Get a single person by ID (GET /api/user/{id}).
pub async fn get_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Person>, AppError> {
    let id = parse_id(id)?;
    Ok(Json(state.person_repo.get_person(id).await?))
}

/// Partially update a person (PATCH /api/user/{id}).
pub async fn update_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdatePersonRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let update = parse_payload(payload)?;

    state.person_repo.update_person(id, &update).await?;

    tracing::info!(person_id = id, "Updated person");

    Ok(Json(json!({ "message": "Data updated successfully" })))
}

/// Delete a person by ID (DELETE /api/user/{id}).
pub async fn delete_person(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(id)?;

    state.person_repo.delete_person(id).await?;

    tracing::info!(person_id = id, "Deleted person");

    Ok(StatusCode::OK)
}
