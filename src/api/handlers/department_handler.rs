//! Department handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{AccessLevel, Department, DepartmentInput};
use crate::errors::{AppError, AppResult};

/// Create department routes
pub fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route("/:id", get(get_department).put(update_department).delete(delete_department))
}

/// Get a department by ID or slug. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/departments/{id}",
    tag = "Departments",
    params(("id" = String, Path, description = "Department ID or slug")),
    responses(
        (status = 200, description = "Success to fetch data", body = Department),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_department(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Department>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.departments().get(&id).await?))
}

/// List departments. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/departments",
    tag = "Departments",
    responses(
        (status = 200, description = "Success to fetch data", body = [Department]),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_departments(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Department>>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.departments().list().await?))
}

/// Create a department. Requires Owner.
#[utoipa::path(
    post,
    path = "/v1/departments",
    tag = "Departments",
    request_body = DepartmentInput,
    responses(
        (status = 200, description = "Success to create", body = Department),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_department(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<DepartmentInput>, AppError>,
) -> AppResult<Json<Department>> {
    current.require(AccessLevel::Owner)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.departments().create(input).await?))
}

/// Update a department. Requires Owner.
///
/// The service list replaces the current one; unknown IDs are skipped.
#[utoipa::path(
    put,
    path = "/v1/departments/{id}",
    tag = "Departments",
    params(("id" = String, Path, description = "Department ID")),
    request_body = DepartmentInput,
    responses(
        (status = 200, description = "Success to update", body = Department),
        (status = 400, description = "Validation error or record not found"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_department(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<DepartmentInput>, AppError>,
) -> AppResult<Json<Department>> {
    current.require(AccessLevel::Owner)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.departments().update(&id, input).await?))
}

/// Delete a department. Requires Owner.
#[utoipa::path(
    delete,
    path = "/v1/departments/{id}",
    tag = "Departments",
    params(("id" = String, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Deleted department as it was", body = Department),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_department(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Department>> {
    current.require(AccessLevel::Owner)?;
    Ok(Json(state.services.departments().delete(&id).await?))
}
