//! User management handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{AccessLevel, CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Get a user by ID or slug
#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID or slug")),
    responses(
        (status = 200, description = "Success to fetch data", body = User),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.users().get(&id).await?))
}

/// List all users
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "Success to fetch data", body = [User]),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_users(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<User>>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.users().list().await?))
}

/// Create a user (Owner only)
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "Success to create", body = User),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<CreateUser>, AppError>,
) -> AppResult<Json<User>> {
    current.require(AccessLevel::Owner)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.users().create(input).await?))
}

/// Update any user, including role, departments and services (Owner only)
#[utoipa::path(
    put,
    path = "/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Success to update", body = User),
        (status = 400, description = "Validation error or record not found"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<UpdateUser>, AppError>,
) -> AppResult<Json<User>> {
    current.require(AccessLevel::Owner)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.users().update(&id, input, true).await?))
}

/// Delete a user (Superuser only)
#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted user as it was", body = User),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    current.require(AccessLevel::Superuser)?;
    Ok(Json(state.services.users().delete(&id).await?))
}
