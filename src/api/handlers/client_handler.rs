//! Client handlers.
//!
//! Administrators register and edit clients; only a Superuser deletes them.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{AccessLevel, Client, ClientInput};
use crate::errors::{AppError, AppResult};

/// Create client routes
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route("/:id", get(get_client).put(update_client).delete(delete_client))
}

/// Get a client. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/clients/{id}",
    tag = "Clients",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Success to fetch data", body = Client),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_client(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Client>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.clients().get(&id).await?))
}

/// List clients. Requires Staff.
#[utoipa::path(
    get,
    path = "/v1/clients",
    tag = "Clients",
    responses(
        (status = 200, description = "Success to fetch data", body = [Client]),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_clients(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Client>>> {
    current.require(AccessLevel::Staff)?;
    Ok(Json(state.services.clients().list().await?))
}

/// Create a client. Requires Administrator.
#[utoipa::path(
    post,
    path = "/v1/clients",
    tag = "Clients",
    request_body = ClientInput,
    responses(
        (status = 200, description = "Success to create", body = Client),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_client(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<ClientInput>, AppError>,
) -> AppResult<Json<Client>> {
    current.require(AccessLevel::Administrator)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.clients().create(input).await?))
}

/// Update a client. Requires Administrator.
#[utoipa::path(
    put,
    path = "/v1/clients/{id}",
    tag = "Clients",
    params(("id" = String, Path, description = "Client ID")),
    request_body = ClientInput,
    responses(
        (status = 200, description = "Success to update", body = Client),
        (status = 400, description = "Validation error or record not found"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_client(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<ClientInput>, AppError>,
) -> AppResult<Json<Client>> {
    current.require(AccessLevel::Administrator)?;
    let ValidatedJson(input) = payload?;
    Ok(Json(state.services.clients().update(&id, input).await?))
}

/// Delete a client. Requires Superuser.
#[utoipa::path(
    delete,
    path = "/v1/clients/{id}",
    tag = "Clients",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Deleted client as it was", body = Client),
        (status = 400, description = "Failed to fetch data"),
        (status = 401, description = "Failed to the authentication"),
        (status = 403, description = "Access denied")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_client(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<Client>> {
    current.require(AccessLevel::Superuser)?;
    Ok(Json(state.services.clients().delete(&id).await?))
}
