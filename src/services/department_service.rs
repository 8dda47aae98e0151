//! Department service - Clinic departments and the services they offer.

use async_trait::async_trait;
use std::sync::Arc;

use super::lookup::{parse_id, parse_lookup, Lookup};
use crate::domain::{Department, DepartmentInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Department service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DepartmentService: Send + Sync {
    /// Get department by numeric ID or slug
    async fn get(&self, id_or_slug: &str) -> AppResult<Department>;

    async fn list(&self) -> AppResult<Vec<Department>>;

    /// Create a department. Unknown service IDs are dropped.
    async fn create(&self, input: DepartmentInput) -> AppResult<Department>;

    /// Update name and slug and replace the service set
    async fn update(&self, id: &str, input: DepartmentInput) -> AppResult<Department>;

    async fn delete(&self, id: &str) -> AppResult<Department>;
}

/// Concrete implementation of DepartmentService using Unit of Work.
pub struct DepartmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DepartmentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn department_id(id: &str) -> AppResult<i32> {
    parse_id(id).inspect_err(|_| tracing::debug!("Failed to fetch department ID: {}", id))
}

#[async_trait]
impl<U: UnitOfWork> DepartmentService for DepartmentManager<U> {
    async fn get(&self, id_or_slug: &str) -> AppResult<Department> {
        let lookup = parse_lookup(id_or_slug).inspect_err(|_| {
            tracing::debug!("Failed to fetch department with: {}", id_or_slug)
        })?;

        let found = match lookup {
            Lookup::Id(id) => self.uow.departments().find_by_id(id).await,
            Lookup::Slug(slug) => self.uow.departments().find_by_slug(slug).await,
        };
        found.and_then(OptionExt::ok_or_not_found).inspect_err(|e| {
            tracing::debug!("Failed to fetch department {}: {}", id_or_slug, e)
        })
    }

    async fn list(&self) -> AppResult<Vec<Department>> {
        self.uow
            .departments()
            .list()
            .await
            .inspect_err(|e| tracing::debug!("Failed to fetch departments: {}", e))
    }

    async fn create(&self, input: DepartmentInput) -> AppResult<Department> {
        self.uow
            .departments()
            .create(input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to create department: {}", e))
    }

    async fn update(&self, id: &str, input: DepartmentInput) -> AppResult<Department> {
        self.uow
            .departments()
            .update(department_id(id)?, input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to update department with ID {}: {}", id, e))
    }

    async fn delete(&self, id: &str) -> AppResult<Department> {
        self.uow
            .departments()
            .delete(department_id(id)?)
            .await
            .inspect_err(|e| tracing::debug!("Failed to delete department with ID {}: {}", id, e))
    }
}
