//! Role service - Role catalogue management.

use async_trait::async_trait;
use std::sync::Arc;

use super::lookup::parse_id;
use crate::domain::{Role, RoleInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleService: Send + Sync {
    /// Get active role by numeric ID
    async fn get(&self, id: &str) -> AppResult<Role>;

    /// List all active roles
    async fn list(&self) -> AppResult<Vec<Role>>;

    async fn create(&self, input: RoleInput) -> AppResult<Role>;

    async fn update(&self, id: &str, input: RoleInput) -> AppResult<Role>;

    /// Soft delete role, returning it as it was
    async fn delete(&self, id: &str) -> AppResult<Role>;
}

/// Concrete implementation of RoleService using Unit of Work.
pub struct RoleManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RoleManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn role_id(id: &str) -> AppResult<i32> {
    parse_id(id).inspect_err(|_| tracing::debug!("Failed to fetch role ID: {}", id))
}

#[async_trait]
impl<U: UnitOfWork> RoleService for RoleManager<U> {
    async fn get(&self, id: &str) -> AppResult<Role> {
        self.uow
            .roles()
            .find_by_id(role_id(id)?)
            .await
            .and_then(OptionExt::ok_or_not_found)
            .inspect_err(|e| tracing::debug!("Failed to fetch role with ID {}: {}", id, e))
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        self.uow
            .roles()
            .list()
            .await
            .inspect_err(|e| tracing::debug!("Failed to fetch roles: {}", e))
    }

    async fn create(&self, input: RoleInput) -> AppResult<Role> {
        self.uow
            .roles()
            .create(input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to create role: {}", e))
    }

    async fn update(&self, id: &str, input: RoleInput) -> AppResult<Role> {
        self.uow
            .roles()
            .update(role_id(id)?, input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to update role with ID {}: {}", id, e))
    }

    async fn delete(&self, id: &str) -> AppResult<Role> {
        self.uow
            .roles()
            .delete(role_id(id)?)
            .await
            .inspect_err(|e| tracing::debug!("Failed to delete role with ID {}: {}", id, e))
    }
}
