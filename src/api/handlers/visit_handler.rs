//! Visit handlers.
//!
//! Writes record the session user as the last editor.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{AccessLevel, Visit, VisitInput};
use crate::errors::{AppError, AppResult};

/// Create visit routes
pub fn visit_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_visits).post(create_visit))
        .route("/:id", get(get_visit).put(update_visit).delete(delete_visit))
}

/// Get a visit. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/visits/{id}",
    tag = "Visits",
    params(("id" = String, Path, description = "Visit ID")),
    responses(
        (status = 200, description = "Success to fetch data", body = Visit),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_visit(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Visit>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.visits().get(&id).await?))
}

/// List visits. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/visits",
    tag = "Visits",
    responses(
        (status = 200, description = "Success to fetch data", body = [Visit]),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_visits(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Visit>>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.visits().list().await?))
}

/// Create a visit. Requires Administrator.
#[utoipa::path(
    post,
    path = "/v1/visits",
    tag = "Visits",
    request_body = VisitInput,
    responses(
        (status = 200, description = "Success to create", body = Visit),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_visit(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<VisitInput>, AppError>,
) -> AppResult<Json<Visit>> {
    let editor = current.require(AccessLevel::Administrator)?;
    let ValidatedJson(mut input) = payload?;
    input.last_updated_by_id = editor.id;
    Ok(Json(state.services.visits().create(input).await?))
}

/// Update a visit. Requires Administrator.
#[utoipa::path(
    put,
    path = "/v1/visits/{id}",
    tag = "Visits",
    params(("id" = String, Path, description = "Visit ID")),
    request_body = VisitInput,
    responses(
        (status = 200, description = "Success to update", body = Visit),
        (status = 400, description = "Validation error or record not found"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_visit(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<VisitInput>, AppError>,
) -> AppResult<Json<Visit>> {
    let editor = current.require(AccessLevel::Administrator)?;
    let ValidatedJson(mut input) = payload?;
    input.last_updated_by_id = editor.id;
    Ok(Json(state.services.visits().update(&id, input).await?))
}

/// Delete a visit. Requires Superuser.
#[utoipa::path(
    delete,
    path = "/v1/visits/{id}",
    tag = "Visits",
    params(("id" = String, Path, description = "Visit ID")),
    responses(
        (status = 200, description = "Deleted visit as it was", body = Visit),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_visit(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Visit>> {
    current.require(AccessLevel::Superuser)?;
    Ok(Json(state.services.visits().delete(&id).await?))
}
