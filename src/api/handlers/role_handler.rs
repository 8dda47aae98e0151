//! Role handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{AccessLevel, Role, RoleInput};
use crate::errors::{AppError, AppResult};

/// Create role routes
pub fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_roles).post(create_role))
        .route("/:id", get(get_role).put(update_role).delete(delete_role))
}

/// Get a role. Requires Owner.
#[utoipa::path(
    get,
    path = "/v1/roles/{id}",
    tag = "Roles",
    params(("id" = String, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Success to fetch data", body = Role),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_role(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Role>> {
    current.require(AccessLevel::Owner)?;
    Ok(Json(state.services.roles().get(&id).await?))
}

/// List roles. Requires Owner.
#[utoipa::path(
    get,
    path = "/v1/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "Success to fetch data", body = [Role]),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_roles(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Role>>> {
    current.require(AccessLevel::Owner)?;
    Ok(Json(state.services.roles().list().await?))
}

/// Create a role. Requires Superuser.
#[utoipa::path(
    post,
    path = "/v1/roles",
    tag = "Roles",
    request_body = RoleInput,
    responses(
        (status = 200, description = "Success to create", body = Role),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_role(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<RoleInput>, AppError>,
) -> AppResult<Json<Role>> {
    current.require(AccessLevel::Superuser)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.roles().create(input).await?))
}

/// Update a role. Requires Superuser.
#[utoipa::path(
    put,
    path = "/v1/roles/{id}",
    tag = "Roles",
    params(("id" = String, Path, description = "Role ID")),
    request_body = RoleInput,
    responses(
        (status = 200, description = "Success to update", body = Role),
        (status = 400, description = "Validation error or record not found"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_role(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<RoleInput>, AppError>,
) -> AppResult<Json<Role>> {
    current.require(AccessLevel::Superuser)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.roles().update(&id, input).await?))
}

/// Delete a role. Requires Superuser.
#[utoipa::path(
    delete,
    path = "/v1/roles/{id}",
    tag = "Roles",
    params(("id" = String, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Deleted role as it was", body = Role),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_role(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Role>> {
    current.require(AccessLevel::Superuser)?;
    Ok(Json(state.services.roles().delete(&id).await?))
}
