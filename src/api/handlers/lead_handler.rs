//! Lead handlers.
//!
//! Anyone may submit a lead; staff work through them.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{AccessLevel, Lead, LeadInput};
use crate::errors::{AppError, AppResult};

/// Create lead routes
pub fn lead_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_leads).post(create_lead))
        .route("/:id", get(get_lead).put(update_lead).delete(delete_lead))
}

/// Get a lead. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/leads/{id}",
    tag = "Leads",
    params(("id" = String, Path, description = "Lead ID")),
    responses(
        (status = 200, description = "Success to fetch data", body = Lead),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_lead(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Lead>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.leads().get(&id).await?))
}

/// List leads. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/leads",
    tag = "Leads",
    responses(
        (status = 200, description = "Success to fetch data", body = [Lead]),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_leads(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Lead>>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.leads().list().await?))
}

/// Submit a lead. Open to everyone.
#[utoipa::path(
    post,
    path = "/v1/leads",
    tag = "Leads",
    request_body = LeadInput,
    responses(
        (status = 200, description = "Success to create", body = Lead),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_lead(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<LeadInput>,
) -> AppResult<Json<Lead>> {
    Ok(Json(state.services.leads().create(input).await?))
}

/// Update a lead. Requires Staff.
#[utoipa::path(
    put,
    path = "/v1/leads/{id}",
    tag = "Leads",
    params(("id" = String, Path, description = "Lead ID")),
    request_body = LeadInput,
    responses(
        (status = 200, description = "Success to update", body = Lead),
        (status = 400, description = "Validation error or record not found"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_lead(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<LeadInput>, AppError>,
) -> AppResult<Json<Lead>> {
    let editor = current.require(AccessLevel::Staff)?;
    let ValidatedJson(mut input) = payload?;
    input.last_updated_by_id = editor.id;
    Ok(Json(state.services.leads().update(&id, input).await?))
}

/// Delete a lead. Requires Superuser.
#[utoipa::path(
    delete,
    path = "/v1/leads/{id}",
    tag = "Leads",
    params(("id" = String, Path, description = "Lead ID")),
    responses(
        (status = 200, description = "Deleted lead as it was", body = Lead),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_lead(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Lead>> {
    current.require(AccessLevel::Superuser)?;
    Ok(Json(state.services.leads().delete(&id).await?))
}
