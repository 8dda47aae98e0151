//! User service - Staff accounts.
//!
//! Owners manage every column of an account; a user editing their own
//! profile only reaches the personal columns.

use async_trait::async_trait;
use std::sync::Arc;

use super::lookup::{parse_id, parse_lookup, Lookup};
use crate::domain::{CreateUser, NewUser, Password, UpdateUser, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User service trait for dependency injection.
///
/// Operations never see soft-deleted users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by numeric ID or slug
    async fn get(&self, id_or_slug: &str) -> AppResult<User>;

    /// List all active users
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Create an account with a hashed password. The slug starts as the ID.
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// Update a user.
    ///
    /// With `owner` set the role, status, profession, info, departments and
    /// services are written too; otherwise only the personal columns.
    async fn update(&self, id: &str, input: UpdateUser, owner: bool) -> AppResult<User>;

    /// Soft delete user, returning the account as it was
    async fn delete(&self, id: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn user_id(id: &str) -> AppResult<i32> {
    parse_id(id).inspect_err(|_| tracing::debug!("Failed to fetch user ID: {}", id))
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get(&self, id_or_slug: &str) -> AppResult<User> {
        let lookup = parse_lookup(id_or_slug)
            .inspect_err(|_| tracing::debug!("Failed to fetch user with: {}", id_or_slug))?;

        let found = match lookup {
            Lookup::Id(id) => self.uow.users().find_by_id(id).await,
            Lookup::Slug(slug) => self.uow.users().find_by_slug(slug).await,
        };
        found
            .and_then(OptionExt::ok_or_not_found)
            .inspect_err(|e| tracing::debug!("Failed to fetch user {}: {}", id_or_slug, e))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        self.uow
            .users()
            .list()
            .await
            .inspect_err(|e| tracing::debug!("Failed to fetch users: {}", e))
    }

    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let password_hash = Password::new(&input.password)?.into_string();
        let new_user = NewUser {
            username: input.username,
            password_hash,
            role_id: input.role_id,
        };

        self.uow
            .users()
            .create(new_user)
            .await
            .inspect_err(|e| tracing::debug!("Failed to create user: {}", e))
    }

    async fn update(&self, id: &str, input: UpdateUser, owner: bool) -> AppResult<User> {
        let user_id = user_id(id)?;
        let users = self.uow.users();

        let result = if owner {
            users.update_by_owner(user_id, input).await
        } else {
            users.update_profile(user_id, input).await
        };
        result.inspect_err(|e| tracing::debug!("Failed to update user with ID {}: {}", id, e))
    }

    async fn delete(&self, id: &str) -> AppResult<User> {
        self.uow
            .users()
            .delete(user_id(id)?)
            .await
            .inspect_err(|e| tracing::debug!("Failed to delete user: {}", e))
    }
}
