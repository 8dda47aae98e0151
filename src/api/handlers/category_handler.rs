//! Service category handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{AccessLevel, Category, CategoryInput};
use crate::errors::{AppError, AppResult};

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", get(get_category).put(update_category).delete(delete_category))
}

/// Get a category. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/categories/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Success to fetch data", body = Category),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_category(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.categories().get(&id).await?))
}

/// List categories. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Success to fetch data", body = [Category]),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_categories(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Category>>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.categories().list().await?))
}

/// Create a category. Requires Owner.
#[utoipa::path(
    post,
    path = "/v1/categories",
    tag = "Categories",
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Success to create", body = Category),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_category(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<CategoryInput>, AppError>,
) -> AppResult<Json<Category>> {
    current.require(AccessLevel::Owner)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.categories().create(input).await?))
}

/// Update a category. Requires Owner.
#[utoipa::path(
    put,
    path = "/v1/categories/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ID")),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Success to update", body = Category),
        (status = 400, description = "Validation error or record not found"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_category(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<CategoryInput>, AppError>,
) -> AppResult<Json<Category>> {
    current.require(AccessLevel::Owner)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.categories().update(&id, input).await?))
}

/// Delete a category. Requires Owner.
#[utoipa::path(
    delete,
    path = "/v1/categories/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Deleted category as it was", body = Category),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_category(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    current.require(AccessLevel::Owner)?;
    Ok(Json(state.services.categories().delete(&id).await?))
}
