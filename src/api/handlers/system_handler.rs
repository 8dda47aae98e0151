//! Health check.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResult {
    #[schema(example = "available")]
    pub status: &'static str,
}

pub fn system_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Report that the API is up. Does not touch the database.
#[utoipa::path(
    get,
    path = "/v1/health",
    tag = "System",
    responses((status = 200, description = "Success to fetch health status", body = HealthResult))
)]
pub async fn health() -> Json<HealthResult> {
    Json(HealthResult {
        status: "available",
    })
}
