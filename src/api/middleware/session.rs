//! Cookie session middleware.
//!
//! Resolves the `Authorization` cookie to a user on every request. A live
//! session gets its TTL and cookie refreshed; a session whose user is gone
//! is dropped.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::SET_COOKIE, request::Parts, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use std::convert::Infallible;

use crate::api::AppState;
use crate::config::SESSION_COOKIE;
use crate::domain::{AccessLevel, User};
use crate::errors::{AppError, AppResult};
use crate::infra::Principal;

/// A resolved session: its id and the freshly loaded user.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub user: User,
}

/// The caller of the current request, if they hold a live session.
#[derive(Clone, Debug, Default)]
pub struct CurrentUser(pub Option<Session>);

impl CurrentUser {
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.0.as_ref().map(|s| &s.user)
    }

    /// Level granted by the user's role; `Unauthorized` without a session.
    pub fn access_level(&self) -> AccessLevel {
        self.user()
            .map(User::access_level)
            .unwrap_or(AccessLevel::Unauthorized)
    }

    /// Check the caller against an endpoint minimum.
    ///
    /// Anything below Staff is 401, anything below `required` is 403.
    pub fn require(&self, required: AccessLevel) -> AppResult<&User> {
        let actual = self.access_level();
        if !AccessLevel::Staff.access_allowed(actual) {
            return Err(AppError::Unauthorized);
        }
        if !required.access_allowed(actual) {
            return Err(AppError::Forbidden);
        }
        self.user().ok_or(AppError::Unauthorized)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default())
    }
}

/// `Set-Cookie` value carrying a session id.
pub fn session_cookie(session_id: &str, max_age: u64) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly",
        SESSION_COOKIE, session_id, max_age
    )
}

/// `Set-Cookie` value that makes the browser forget the session.
pub fn expired_session_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly", SESSION_COOKIE)
}

async fn resolve(state: &AppState, session_id: &str) -> Option<Session> {
    let principal = match state.sessions.load(session_id).await {
        Ok(principal) => principal?,
        Err(e) => {
            tracing::warn!("Failed to load session: {}", e);
            return None;
        }
    };

    let user = match state.services.auth().current_user(principal.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::debug!("Dropping session of missing user {}", principal.user_id);
            if let Err(e) = state.sessions.remove(session_id).await {
                tracing::warn!("Failed to remove session: {}", e);
            }
            return None;
        }
        Err(e) => {
            tracing::warn!("Failed to load session user {}: {}", principal.user_id, e);
            return None;
        }
    };

    let principal = Principal {
        user_id: user.id,
        role: user.role_name().to_string(),
    };
    if let Err(e) = state
        .sessions
        .save(session_id, &principal, state.session_max_age())
        .await
    {
        tracing::warn!("Failed to refresh session: {}", e);
    }

    Some(Session {
        id: session_id.to_string(),
        user,
    })
}

/// Session middleware.
///
/// Injects [`CurrentUser`] into the request extensions and re-sends the
/// cookie unless the handler already set one.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let session = match jar.get(SESSION_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => resolve(&state, cookie.value()).await,
        _ => None,
    };
    let refreshed = session.as_ref().map(|s| s.id.clone());

    request.extensions_mut().insert(CurrentUser(session));
    let mut response = next.run(request).await;

    if let Some(session_id) = refreshed {
        if !response.headers().contains_key(SET_COOKIE) {
            let cookie = session_cookie(&session_id, state.session_max_age());
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use chrono::Utc;

    fn user_with_role(name: &str) -> User {
        User {
            id: 1,
            role: Some(Role {
                id: 1,
                name: name.to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }),
            ..User::default()
        }
    }

    fn current(name: &str) -> CurrentUser {
        CurrentUser(Some(Session {
            id: "sid".to_string(),
            user: user_with_role(name),
        }))
    }

    #[test]
    fn test_anonymous_is_unauthorized() {
        let anonymous = CurrentUser::default();
        assert!(matches!(
            anonymous.require(AccessLevel::Staff),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_unknown_role_is_unauthorized() {
        assert!(matches!(
            current("Guest").require(AccessLevel::Staff),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_insufficient_role_is_forbidden() {
        assert!(matches!(
            current("Staff").require(AccessLevel::Owner),
            Err(AppError::Forbidden)
        ));
    }

    #[test]
    fn test_sufficient_role_passes() {
        assert_eq!(current("Superuser").require(AccessLevel::Owner).unwrap().id, 1);
        assert_eq!(current("Admin").access_level(), AccessLevel::Administrator);
    }

    #[test]
    fn test_cookie_strings() {
        assert_eq!(
            session_cookie("abc", 86400),
            "Authorization=abc; Path=/; Max-Age=86400; HttpOnly"
        );
        assert!(expired_session_cookie().contains("Max-Age=0"));
    }
}
