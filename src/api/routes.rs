//! Application route configuration.

use axum::{middleware, Router};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth_routes, category_routes, client_routes, department_routes, lead_routes, pet_routes,
    profile_routes, role_routes, service_routes, system_routes, user_routes, visit_routes,
};
use super::middleware::{handle_panic, security_headers, session_middleware};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{API_V1, OPENAPI_JSON_PATH};

/// Every `/v1` endpoint.
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(system_routes())
        .merge(auth_routes())
        .nest("/profile", profile_routes())
        .nest("/roles", role_routes())
        .nest("/users", user_routes())
        .nest("/departments", department_routes())
        .nest("/categories", category_routes())
        .nest("/services", service_routes())
        .nest("/clients", client_routes())
        .nest("/pets", pet_routes())
        .nest("/visits", visit_routes())
        .nest("/leads", lead_routes())
}

/// Create the application router with all routes configured.
///
/// Layers, outermost first: panic recovery, tracing, security headers,
/// CORS, session resolution.
pub fn create_router(state: AppState) -> Router {
    let extension = &state.config.extension;
    let swagger = &state.config.swagger;

    let mut router = Router::new().nest(API_V1, api_routes());

    if swagger.enabled {
        router = router
            .merge(SwaggerUi::new(swagger.path.clone()).url(OPENAPI_JSON_PATH, ApiDoc::openapi()));
    }

    router = router.layer(middleware::from_fn_with_state(
        state.clone(),
        session_middleware,
    ));

    if extension.cors_enabled {
        router = router.layer(CorsLayer::very_permissive());
    }
    if extension.security_enabled {
        router = security_headers(router);
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}
