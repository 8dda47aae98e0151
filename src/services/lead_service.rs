//! Lead service - Inbound requests from prospective clients.

use async_trait::async_trait;
use std::sync::Arc;

use super::lookup::parse_id;
use crate::domain::{Lead, LeadInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Lead service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LeadService: Send + Sync {
    /// Get active lead by numeric ID
    async fn get(&self, id: &str) -> AppResult<Lead>;

    /// List all active leads
    async fn list(&self) -> AppResult<Vec<Lead>>;

    /// Create a lead. Status always starts as `open`.
    async fn create(&self, input: LeadInput) -> AppResult<Lead>;

    /// `input.last_updated_by_id` must be set by the caller
    async fn update(&self, id: &str, input: LeadInput) -> AppResult<Lead>;

    /// Soft delete lead, returning it as it was
    async fn delete(&self, id: &str) -> AppResult<Lead>;
}

/// Concrete implementation of LeadService using Unit of Work.
pub struct LeadManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> LeadManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn lead_id(id: &str) -> AppResult<i32> {
    parse_id(id).inspect_err(|_| tracing::debug!("Failed to fetch lead ID: {}", id))
}

#[async_trait]
impl<U: UnitOfWork> LeadService for LeadManager<U> {
    async fn get(&self, id: &str) -> AppResult<Lead> {
        self.uow
            .leads()
            .find_by_id(lead_id(id)?)
            .await
            .and_then(OptionExt::ok_or_not_found)
            .inspect_err(|e| tracing::debug!("Failed to fetch lead with ID {}: {}", id, e))
    }

    async fn list(&self) -> AppResult<Vec<Lead>> {
        self.uow
            .leads()
            .list()
            .await
            .inspect_err(|e| tracing::debug!("Failed to fetch leads: {}", e))
    }

    async fn create(&self, input: LeadInput) -> AppResult<Lead> {
        self.uow
            .leads()
            .create(input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to create lead: {}", e))
    }

    async fn update(&self, id: &str, input: LeadInput) -> AppResult<Lead> {
        self.uow
            .leads()
            .update(lead_id(id)?, input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to update lead with ID {}: {}", id, e))
    }

    async fn delete(&self, id: &str) -> AppResult<Lead> {
        self.uow
            .leads()
            .delete(lead_id(id)?)
            .await
            .inspect_err(|e| tracing::debug!("Failed to delete lead with ID {}: {}", id, e))
    }
}
