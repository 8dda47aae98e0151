//! Category service - Service categories.

use async_trait::async_trait;
use std::sync::Arc;

use super::lookup::parse_id;
use crate::domain::{Category, CategoryInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Get active category by numeric ID
    async fn get(&self, id: &str) -> AppResult<Category>;

    /// List all active categorys
    async fn list(&self) -> AppResult<Vec<Category>>;

    async fn create(&self, input: CategoryInput) -> AppResult<Category>;

    async fn update(&self, id: &str, input: CategoryInput) -> AppResult<Category>;

    /// Soft delete category, returning it as it was
    async fn delete(&self, id: &str) -> AppResult<Category>;
}

/// Concrete implementation of CategoryService using Unit of Work.
pub struct CategoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn category_id(id: &str) -> AppResult<i32> {
    parse_id(id).inspect_err(|_| tracing::debug!("Failed to fetch category ID: {}", id))
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryManager<U> {
    async fn get(&self, id: &str) -> AppResult<Category> {
        self.uow
            .categories()
            .find_by_id(category_id(id)?)
            .await
            .and_then(OptionExt::ok_or_not_found)
            .inspect_err(|e| tracing::debug!("Failed to fetch category with ID {}: {}", id, e))
    }

    async fn list(&self) -> AppResult<Vec<Category>> {
        self.uow
            .categories()
            .list()
            .await
            .inspect_err(|e| tracing::debug!("Failed to fetch categorys: {}", e))
    }

    async fn create(&self, input: CategoryInput) -> AppResult<Category> {
        self.uow
            .categories()
            .create(input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to create category: {}", e))
    }

    async fn update(&self, id: &str, input: CategoryInput) -> AppResult<Category> {
        self.uow
            .categories()
            .update(category_id(id)?, input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to update category with ID {}: {}", id, e))
    }

    async fn delete(&self, id: &str) -> AppResult<Category> {
        self.uow
            .categories()
            .delete(category_id(id)?)
            .await
            .inspect_err(|e| tracing::debug!("Failed to delete category with ID {}: {}", id, e))
    }
}
