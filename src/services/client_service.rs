//! Client service - Pet owners.

use async_trait::async_trait;
use std::sync::Arc;

use super::lookup::parse_id;
use crate::domain::{Client, ClientInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Client service trait for dependency injection.
///
/// Clients have no slug, so lookups are by numeric ID only.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClientService: Send + Sync {
    /// Get active client by numeric ID
    async fn get(&self, id: &str) -> AppResult<Client>;

    /// List all active clients
    async fn list(&self) -> AppResult<Vec<Client>>;

    async fn create(&self, input: ClientInput) -> AppResult<Client>;

    async fn update(&self, id: &str, input: ClientInput) -> AppResult<Client>;

    /// Soft delete client, returning it as it was
    async fn delete(&self, id: &str) -> AppResult<Client>;
}

/// Concrete implementation of ClientService using Unit of Work.
pub struct ClientManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ClientManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn client_id(id: &str) -> AppResult<i32> {
    parse_id(id).inspect_err(|_| tracing::debug!("Failed to fetch client ID: {}", id))
}

#[async_trait]
impl<U: UnitOfWork> ClientService for ClientManager<U> {
    async fn get(&self, id: &str) -> AppResult<Client> {
        self.uow
            .clients()
            .find_by_id(client_id(id)?)
            .await
            .and_then(OptionExt::ok_or_not_found)
            .inspect_err(|e| tracing::debug!("Failed to fetch client with ID {}: {}", id, e))
    }

    async fn list(&self) -> AppResult<Vec<Client>> {
        self.uow
            .clients()
            .list()
            .await
            .inspect_err(|e| tracing::debug!("Failed to fetch clients: {}", e))
    }

    async fn create(&self, input: ClientInput) -> AppResult<Client> {
        self.uow
            .clients()
            .create(input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to create client: {}", e))
    }

    async fn update(&self, id: &str, input: ClientInput) -> AppResult<Client> {
        self.uow
            .clients()
            .update(client_id(id)?, input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to update client with ID {}: {}", id, e))
    }

    async fn delete(&self, id: &str) -> AppResult<Client> {
        self.uow
            .clients()
            .delete(client_id(id)?)
            .await
            .inspect_err(|e| tracing::debug!("Failed to delete client with ID {}: {}", id, e))
    }
}
