//! Authentication service - Credential checks and password changes.
//!
//! Session bookkeeping lives in the HTTP layer; this service only answers
//! "who is this" and "may they change their password".

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::config::PASSWORD_HASH_COST;
use crate::domain::{Password, UpdatePassword, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hash checked when no account matches, so a miss costs as much as a hit.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    bcrypt::hash("dummy-Password-1", PASSWORD_HASH_COST).unwrap_or_default()
});

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Find the account by username, e-mail or phone and verify the password
    async fn login(&self, login: &str, password: &str) -> AppResult<User>;

    /// Reload the user behind a session. `None` if the account is gone.
    async fn current_user(&self, user_id: i32) -> AppResult<Option<User>>;

    /// Replace the password after checking the old one
    async fn change_password(&self, user_id: i32, input: UpdatePassword) -> AppResult<()>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, login: &str, password: &str) -> AppResult<User> {
        let user = self
            .uow
            .users()
            .find_by_login(login)
            .await
            .inspect_err(|e| tracing::error!("Failed to look up login {}: {}", login, e))?;

        let stored_hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => DUMMY_HASH.clone(),
        };
        let password_valid = Password::from_hash(stored_hash).verify(password);

        match user {
            Some(user) if password_valid => Ok(user),
            _ => {
                tracing::debug!("Failed to authenticate login {}", login);
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn current_user(&self, user_id: i32) -> AppResult<Option<User>> {
        self.uow
            .users()
            .find_by_id(user_id)
            .await
            .inspect_err(|e| tracing::error!("Failed to load session user {}: {}", user_id, e))
    }

    async fn change_password(&self, user_id: i32, input: UpdatePassword) -> AppResult<()> {
        let users = self.uow.users();
        let user = users
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound)
            .inspect_err(|_| tracing::debug!("Failed to fetch user with ID {}", user_id))?;

        if !Password::from_hash(user.password_hash).verify(&input.old_password) {
            tracing::debug!("Old password mismatch for user with ID {}", user_id);
            return Err(AppError::validation(
                "oldPassword: does not match the current password",
            ));
        }

        let password_hash = Password::new(&input.new_password)?.into_string();
        users
            .change_password(user_id, password_hash)
            .await
            .inspect_err(|e| tracing::debug!("Failed to update user with ID {}: {}", user_id, e))
    }
}
