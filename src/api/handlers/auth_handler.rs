//! Authentication and profile handlers.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{expired_session_cookie, session_cookie, CurrentUser};
use crate::api::AppState;
use crate::domain::{AccessLevel, LoginRequest, UpdatePassword, UpdateUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{session::new_session_id, Principal};

/// Create login/logout routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_profile).put(update_profile))
        .route("/password", put(update_password))
}

/// Log in with a username, e-mail or phone.
///
/// A caller who already holds a live session gets that session's user back.
#[utoipa::path(
    post,
    path = "/v1/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = User),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Response> {
    if let Some(user) = current.user() {
        return Ok(Json(user.clone()).into_response());
    }

    let user = state
        .services
        .auth()
        .login(&payload.login, &payload.password)
        .await?;

    let session_id = new_session_id();
    let principal = Principal {
        user_id: user.id,
        role: user.role_name().to_string(),
    };
    state
        .sessions
        .save(&session_id, &principal, state.session_max_age())
        .await?;
    tracing::info!("User {} logged in", user.username);

    let cookie = session_cookie(&session_id, state.session_max_age());
    Ok(([(SET_COOKIE, cookie)], Json(user)).into_response())
}

/// Log out and drop the session
#[utoipa::path(
    post,
    path = "/v1/logout",
    tag = "Auth",
    responses(
        (status = 200, description = "Successfully logged out"),
        (status = 401, description = "Failed to the authentication")
    ),
    security(("session_cookie" = []))
)]
pub async fn logout(State(state): State<AppState>, current: CurrentUser) -> AppResult<Response> {
    current.require(AccessLevel::Staff)?;
    if let Some(session) = current.session() {
        state.sessions.remove(&session.id).await?;
    }

    Ok((StatusCode::OK, [(SET_COOKIE, expired_session_cookie())]).into_response())
}

/// Get the session user's own profile
#[utoipa::path(
    get,
    path = "/v1/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "Success to fetch data", body = User),
        (status = 401, description = "Failed to the authentication")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_profile(current: CurrentUser) -> AppResult<Json<User>> {
    let user = current.user().ok_or(AppError::Unauthorized)?;
    Ok(Json(user.clone()))
}

/// Update the session user's personal data.
///
/// Role, status, profession, info, departments and services in the body are
/// ignored; only an owner changes those through `/v1/users/{id}`.
#[utoipa::path(
    put,
    path = "/v1/profile",
    tag = "Profile",
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Success to update", body = User),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Failed to the authentication")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<UpdateUser>, AppError>,
) -> AppResult<Json<User>> {
    let user = current.user().ok_or(AppError::Unauthorized)?;
    let ValidatedJson(input) = payload?;

    let updated = state
        .services
        .users()
        .update(&user.id.to_string(), input, false)
        .await?;
    Ok(Json(updated))
}

/// Change the session user's password
#[utoipa::path(
    put,
    path = "/v1/profile/password",
    tag = "Profile",
    request_body = UpdatePassword,
    responses(
        (status = 200, description = "Password changed", body = User),
        (status = 400, description = "Validation error or wrong old password"),
        (status = 401, description = "Failed to the authentication")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_password(
    State(state): State<AppState>,
    current: CurrentUser,
    payload: Result<ValidatedJson<UpdatePassword>, AppError>,
) -> AppResult<Json<User>> {
    let user = current.user().ok_or(AppError::Unauthorized)?;
    let ValidatedJson(input) = payload?;

    state.services.auth().change_password(user.id, input).await?;
    Ok(Json(user.clone()))
}
