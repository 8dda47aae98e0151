//! Clinic service handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{AccessLevel, Service, ServiceInput};
use crate::errors::{AppError, AppResult};

/// Create clinic service routes
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services).post(create_service))
        .route("/:id", get(get_service).put(update_service).delete(delete_service))
}

/// Get a clinic service. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/services/{id}",
    tag = "Services",
    params(("id" = String, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Success to fetch data", body = Service),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_service(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Service>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.services().get(&id).await?))
}

/// List clinic services. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/services",
    tag = "Services",
    responses(
        (status = 200, description = "Success to fetch data", body = [Service]),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_services(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Service>>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.services().list().await?))
}

/// Create a clinic service. Requires Owner.
#[utoipa::path(
    post,
    path = "/v1/services",
    tag = "Services",
    request_body = ServiceInput,
    responses(
        (status = 200, description = "Success to create", body = Service),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_service(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<ServiceInput>, AppError>,
) -> AppResult<Json<Service>> {
    current.require(AccessLevel::Owner)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.services().create(input).await?))
}

/// Update a clinic service. Requires Owner.
#[utoipa::path(
    put,
    path = "/v1/services/{id}",
    tag = "Services",
    params(("id" = String, Path, description = "Service ID")),
    request_body = ServiceInput,
    responses(
        (status = 200, description = "Success to update", body = Service),
        (status = 400, description = "Validation error or record not found"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_service(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<ServiceInput>, AppError>,
) -> AppResult<Json<Service>> {
    current.require(AccessLevel::Owner)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.services().update(&id, input).await?))
}

/// Delete a clinic service. Requires Owner.
#[utoipa::path(
    delete,
    path = "/v1/services/{id}",
    tag = "Services",
    params(("id" = String, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Deleted service as it was", body = Service),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_service(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Service>> {
    current.require(AccessLevel::Owner)?;
    Ok(Json(state.services.services().delete(&id).await?))
}
