//! Pet handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{AccessLevel, Pet, PetInput};
use crate::errors::{AppError, AppResult};

/// Create pet routes
pub fn pet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_pets).post(create_pet))
        .route("/:id", get(get_pet).put(update_pet).delete(delete_pet))
}

/// Get a pet. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/pets/{id}",
    tag = "Pets",
    params(("id" = String, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Success to fetch data", body = Pet),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_pet(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Pet>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.pets().get(&id).await?))
}

/// List pets. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/pets",
    tag = "Pets",
    responses(
        (status = 200, description = "Success to fetch data", body = [Pet]),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_pets(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Pet>>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.pets().list().await?))
}

/// Create a pet. Requires Staff.
#[utoipa::path(
    post,
    path = "/v1/pets",
    tag = "Pets",
    request_body = PetInput,
    responses(
        (status = 200, description = "Success to create", body = Pet),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_pet(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<PetInput>, AppError>,
) -> AppResult<Json<Pet>> {
    current.require(AccessLevel::Staff)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.pets().create(input).await?))
}

/// Update a pet. Requires Staff.
#[utoipa::path(
    put,
    path = "/v1/pets/{id}",
    tag = "Pets",
    params(("id" = String, Path, description = "Pet ID")),
    request_body = PetInput,
    responses(
        (status = 200, description = "Success to update", body = Pet),
        (status = 400, description = "Validation error or record not found"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_pet(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<PetInput>, AppError>,
) -> AppResult<Json<Pet>> {
    current.require(AccessLevel::Staff)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.pets().update(&id, input).await?))
}

/// Delete a pet. Requires Superuser.
#[utoipa::path(
    delete,
    path = "/v1/pets/{id}",
    tag = "Pets",
    params(("id" = String, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Deleted pet as it was", body = Pet),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_pet(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Pet>> {
    current.require(AccessLevel::Superuser)?;
    Ok(Json(state.services.pets().delete(&id).await?))
}
