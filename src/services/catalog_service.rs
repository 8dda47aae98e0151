//! Catalog service - Priced clinic services.

use async_trait::async_trait;
use std::sync::Arc;

use super::lookup::parse_id;
use crate::domain::{Service, ServiceInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Catalog service trait. Prices are stored as given, no currency handling.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Get active service by numeric ID
    async fn get(&self, id: &str) -> AppResult<Service>;

    /// List all active services
    async fn list(&self) -> AppResult<Vec<Service>>;

    async fn create(&self, input: ServiceInput) -> AppResult<Service>;

    async fn update(&self, id: &str, input: ServiceInput) -> AppResult<Service>;

    /// Soft delete service, returning it as it was
    async fn delete(&self, id: &str) -> AppResult<Service>;
}

/// Concrete implementation of CatalogService using Unit of Work.
pub struct CatalogManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn service_id(id: &str) -> AppResult<i32> {
    parse_id(id).inspect_err(|_| tracing::debug!("Failed to fetch service ID: {}", id))
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for CatalogManager<U> {
    async fn get(&self, id: &str) -> AppResult<Service> {
        self.uow
            .services()
            .find_by_id(service_id(id)?)
            .await
            .and_then(OptionExt::ok_or_not_found)
            .inspect_err(|e| tracing::debug!("Failed to fetch service with ID {}: {}", id, e))
    }

    async fn list(&self) -> AppResult<Vec<Service>> {
        self.uow
            .services()
            .list()
            .await
            .inspect_err(|e| tracing::debug!("Failed to fetch services: {}", e))
    }

    async fn create(&self, input: ServiceInput) -> AppResult<Service> {
        self.uow
            .services()
            .create(input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to create service: {}", e))
    }

    async fn update(&self, id: &str, input: ServiceInput) -> AppResult<Service> {
        self.uow
            .services()
            .update(service_id(id)?, input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to update service with ID {}: {}", id, e))
    }

    async fn delete(&self, id: &str) -> AppResult<Service> {
        self.uow
            .services()
            .delete(service_id(id)?)
            .await
            .inspect_err(|e| tracing::debug!("Failed to delete service with ID {}: {}", id, e))
    }
}
