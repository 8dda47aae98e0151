//! Visit service - Appointments.

use async_trait::async_trait;
use std::sync::Arc;

use super::lookup::parse_id;
use crate::domain::{Visit, VisitInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Visit service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VisitService: Send + Sync {
    /// Get active visit by numeric ID
    async fn get(&self, id: &str) -> AppResult<Visit>;

    /// List all active visits
    async fn list(&self) -> AppResult<Vec<Visit>>;

    /// Client, pet, doctor, service and editor must all exist.
    async fn create(&self, input: VisitInput) -> AppResult<Visit>;

    async fn update(&self, id: &str, input: VisitInput) -> AppResult<Visit>;

    /// Soft delete visit, returning it as it was
    async fn delete(&self, id: &str) -> AppResult<Visit>;
}

/// Concrete implementation of VisitService using Unit of Work.
pub struct VisitManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> VisitManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn visit_id(id: &str) -> AppResult<i32> {
    parse_id(id).inspect_err(|_| tracing::debug!("Failed to fetch visit ID: {}", id))
}

#[async_trait]
impl<U: UnitOfWork> VisitService for VisitManager<U> {
    async fn get(&self, id: &str) -> AppResult<Visit> {
        self.uow
            .visits()
            .find_by_id(visit_id(id)?)
            .await
            .and_then(OptionExt::ok_or_not_found)
            .inspect_err(|e| tracing::debug!("Failed to fetch visit with ID {}: {}", id, e))
    }

    async fn list(&self) -> AppResult<Vec<Visit>> {
        self.uow
            .visits()
            .list()
            .await
            .inspect_err(|e| tracing::debug!("Failed to fetch visits: {}", e))
    }

    async fn create(&self, input: VisitInput) -> AppResult<Visit> {
        self.uow
            .visits()
            .create(input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to create visit: {}", e))
    }

    async fn update(&self, id: &str, input: VisitInput) -> AppResult<Visit> {
        self.uow
            .visits()
            .update(visit_id(id)?, input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to update visit with ID {}: {}", id, e))
    }

    async fn delete(&self, id: &str) -> AppResult<Visit> {
        self.uow
            .visits()
            .delete(visit_id(id)?)
            .await
            .inspect_err(|e| tracing::debug!("Failed to delete visit with ID {}: {}", id, e))
    }
}
