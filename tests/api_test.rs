//! Integration tests for API endpoints.
//!
//! The router runs over `MockServiceContainer` and an in-memory session
//! store, so no database or Redis is needed.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use vet_clinic::api::{create_router, AppState};
use vet_clinic::config::Config;
use vet_clinic::domain::{Lead, Role, User, Visit};
use vet_clinic::errors::AppError;
use vet_clinic::infra::{MemorySessionStore, Principal, SessionStore};
use vet_clinic::services::{
    AuthService, LeadService, MockAuthService, MockLeadService, MockRoleService,
    MockServiceContainer, MockVisitService, RoleService, VisitService,
};

const SESSION_ID: &str = "test-session";

fn user_with_role(id: i32, role_name: &str) -> User {
    User {
        id,
        username: format!("user{}", id),
        slug: id.to_string(),
        active: true,
        role_id: Some(1),
        role: Some(Role {
            id: 1,
            name: role_name.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }),
        ..User::default()
    }
}

/// Auth mock that resolves every session to `user`.
fn auth_for(user: Option<User>) -> Arc<dyn AuthService> {
    let mut auth = MockAuthService::new();
    auth.expect_current_user()
        .returning(move |_| Ok(user.clone()));
    Arc::new(auth)
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.extension.security_enabled = true;
    config
}

async fn app_with(container: MockServiceContainer, session_user: Option<i32>) -> Router {
    let sessions = MemorySessionStore::new();
    if let Some(user_id) = session_user {
        let principal = Principal {
            user_id,
            role: String::new(),
        };
        sessions.save(SESSION_ID, &principal, 60).await.unwrap();
    }

    let state = AppState::new(Arc::new(container), Arc::new(sessions), test_config());
    create_router(state)
}

fn request(method: &str, uri: &str, body: Option<Value>, with_session: bool) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if with_session {
        builder = builder.header(header::COOKIE, format!("Authorization={}", SESSION_ID));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Health & headers
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = app_with(MockServiceContainer::new(), None).await;

    let response = app
        .oneshot(request("GET", "/v1/health", None, false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("x-frame-options").unwrap(), "SAMEORIGIN");
    assert_eq!(body_json(response).await, json!({"status": "available"}));
}

// =============================================================================
// Access control
// =============================================================================

#[tokio::test]
async fn test_anonymous_request_is_unauthorized() {
    let app = app_with(MockServiceContainer::new(), None).await;

    let response = app
        .oneshot(request("GET", "/v1/roles", None, false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unauthorized_write_is_rejected_before_body_validation() {
    let app = app_with(MockServiceContainer::new(), None).await;

    let response = app
        .oneshot(request("POST", "/v1/roles", Some(json!({"name": "1"})), false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_staff_cannot_list_roles() {
    let mut container = MockServiceContainer::new();
    let auth = auth_for(Some(user_with_role(5, "Staff")));
    container.expect_auth().returning(move || auth.clone());

    let app = app_with(container, Some(5)).await;
    let response = app
        .oneshot(request("GET", "/v1/roles", None, true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_owner_lists_roles_and_session_is_refreshed() {
    let mut roles = MockRoleService::new();
    roles.expect_list().returning(|| {
        Ok(vec![Role {
            id: 1,
            name: "Staff".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }])
    });
    let roles: Arc<dyn RoleService> = Arc::new(roles);

    let mut container = MockServiceContainer::new();
    let auth = auth_for(Some(user_with_role(1, "Owner")));
    container.expect_auth().returning(move || auth.clone());
    container.expect_roles().returning(move || roles.clone());

    let app = app_with(container, Some(1)).await;
    let response = app
        .oneshot(request("GET", "/v1/roles", None, true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("Authorization=test-session"));
    assert!(cookie.contains("HttpOnly"));

    let body = body_json(response).await;
    assert_eq!(body[0]["name"], "Staff");
}

#[tokio::test]
async fn test_session_of_deleted_user_is_dropped() {
    let mut container = MockServiceContainer::new();
    let auth = auth_for(None);
    container.expect_auth().returning(move || auth.clone());

    let app = app_with(container, Some(9)).await;
    let response = app
        .oneshot(request("GET", "/v1/profile", None, true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

// =============================================================================
// Login / logout / profile
// =============================================================================

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let mut auth = MockAuthService::new();
    auth.expect_login()
        .withf(|login, password| login == "Test1" && password == "Password1!")
        .returning(|_, _| Ok(user_with_role(1, "Superuser")));
    let auth: Arc<dyn AuthService> = Arc::new(auth);

    let mut container = MockServiceContainer::new();
    container.expect_auth().returning(move || auth.clone());

    let app = app_with(container, None).await;
    let body = json!({"login": "Test1", "password": "Password1!"});
    let response = app
        .oneshot(request("POST", "/v1/login", Some(body), false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers().get(header::SET_COOKIE).unwrap();
    assert!(cookie.to_str().unwrap().contains("Max-Age=86400"));

    let user = body_json(response).await;
    assert_eq!(user["username"], "user1");
    assert!(user.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_with_bad_credentials() {
    let mut auth = MockAuthService::new();
    auth.expect_login()
        .returning(|_, _| Err(AppError::InvalidCredentials));
    let auth: Arc<dyn AuthService> = Arc::new(auth);

    let mut container = MockServiceContainer::new();
    container.expect_auth().returning(move || auth.clone());

    let app = app_with(container, None).await;
    let body = json!({"login": "Test1", "password": "Password9!"});
    let response = app
        .oneshot(request("POST", "/v1/login", Some(body), false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_body_is_validated() {
    let app = app_with(MockServiceContainer::new(), None).await;

    let body = json!({"login": "Test1", "password": "short"});
    let response = app
        .oneshot(request("POST", "/v1/login", Some(body), false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_logout_expires_cookie() {
    let mut container = MockServiceContainer::new();
    let auth = auth_for(Some(user_with_role(1, "Staff")));
    container.expect_auth().returning(move || auth.clone());

    let app = app_with(container, Some(1)).await;
    let response = app
        .oneshot(request("POST", "/v1/logout", None, true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers().get(header::SET_COOKIE).unwrap();
    assert!(cookie.to_str().unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn test_profile_returns_session_user() {
    let mut container = MockServiceContainer::new();
    let auth = auth_for(Some(user_with_role(3, "Admin")));
    container.expect_auth().returning(move || auth.clone());

    let app = app_with(container, Some(3)).await;
    let response = app
        .oneshot(request("GET", "/v1/profile", None, true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], 3);
}

#[tokio::test]
async fn test_password_confirmation_mismatch_is_rejected() {
    let mut container = MockServiceContainer::new();
    let auth = auth_for(Some(user_with_role(3, "Staff")));
    container.expect_auth().returning(move || auth.clone());

    let app = app_with(container, Some(3)).await;
    let body = json!({
        "oldPassword": "Password1!",
        "newPassword": "Password2!",
        "confirmPassword": "Password3!"
    });
    let response = app
        .oneshot(request("PUT", "/v1/profile/password", Some(body), true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Resources
// =============================================================================

#[tokio::test]
async fn test_anyone_can_submit_a_lead() {
    let mut leads = MockLeadService::new();
    leads.expect_create().times(1).returning(|input| {
        Ok(Lead {
            id: 1,
            name: input.name,
            status: "open".to_string(),
            ..Lead::default()
        })
    });
    let leads: Arc<dyn LeadService> = Arc::new(leads);

    let mut container = MockServiceContainer::new();
    container.expect_leads().returning(move || leads.clone());

    let app = app_with(container, None).await;
    let body = json!({
        "name": "Александр",
        "phone": "+79992225566",
        "email": "alex@test.com",
        "comment": "Перезвоните",
        "type": "callback",
        "status": "rejected",
        "doctorId": 1
    });
    let response = app
        .oneshot(request("POST", "/v1/leads", Some(body), false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "open");
}

#[tokio::test]
async fn test_visit_update_records_editor() {
    let mut visits = MockVisitService::new();
    visits
        .expect_update()
        .withf(|id, input| id == "4" && input.last_updated_by_id == 2)
        .times(1)
        .returning(|_, input| {
            Ok(Visit {
                id: 4,
                last_updated_by_id: Some(input.last_updated_by_id),
                ..Visit::default()
            })
        });
    let visits: Arc<dyn VisitService> = Arc::new(visits);

    let mut container = MockServiceContainer::new();
    let auth = auth_for(Some(user_with_role(2, "Admin")));
    container.expect_auth().returning(move || auth.clone());
    container.expect_visits().returning(move || visits.clone());

    let app = app_with(container, Some(2)).await;
    let body = json!({
        "dateTime": "2024-01-01T10:00:00Z",
        "info": "Вакцинация",
        "clientId": 1,
        "petId": 1,
        "doctorId": 1,
        "serviceId": 5
    });
    let response = app
        .oneshot(request("PUT", "/v1/visits/4", Some(body), true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["lastUpdatedById"], 2);
}

#[tokio::test]
async fn test_service_errors_map_to_bad_request() {
    let mut roles = MockRoleService::new();
    roles.expect_get().returning(|_| Err(AppError::NotFound));
    let roles: Arc<dyn RoleService> = Arc::new(roles);

    let mut container = MockServiceContainer::new();
    let auth = auth_for(Some(user_with_role(1, "Superuser")));
    container.expect_auth().returning(move || auth.clone());
    container.expect_roles().returning(move || roles.clone());

    let app = app_with(container, Some(1)).await;
    let response = app
        .oneshot(request("GET", "/v1/roles/77", None, true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["error"]["message"], "record not found");
}
