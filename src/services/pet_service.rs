//! Pet service.

use async_trait::async_trait;
use std::sync::Arc;

use super::lookup::parse_id;
use crate::domain::{Pet, PetInput};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Pet service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PetService: Send + Sync {
    async fn get(&self, id: &str) -> AppResult<Pet>;

    async fn list(&self) -> AppResult<Vec<Pet>>;

    async fn create(&self, input: PetInput) -> AppResult<Pet>;

    async fn update(&self, id: &str, input: PetInput) -> AppResult<Pet>;

    /// Returns the pet as it was before deletion
    async fn delete(&self, id: &str) -> AppResult<Pet>;
}

/// Concrete implementation of PetService using Unit of Work.
pub struct PetManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PetManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn pet_id(id: &str) -> AppResult<i32> {
    parse_id(id).inspect_err(|_| tracing::debug!("Failed to fetch pet ID: {}", id))
}

#[async_trait]
impl<U: UnitOfWork> PetService for PetManager<U> {
    async fn get(&self, id: &str) -> AppResult<Pet> {
        self.uow
            .pets()
            .find_by_id(pet_id(id)?)
            .await
            .and_then(OptionExt::ok_or_not_found)
            .inspect_err(|e| tracing::debug!("Failed to fetch pet with ID {}: {}", id, e))
    }

    async fn list(&self) -> AppResult<Vec<Pet>> {
        self.uow
            .pets()
            .list()
            .await
            .inspect_err(|e| tracing::debug!("Failed to fetch pets: {}", e))
    }

    async fn create(&self, input: PetInput) -> AppResult<Pet> {
        self.uow
            .pets()
            .create(input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to create pet: {}", e))
    }

    async fn update(&self, id: &str, input: PetInput) -> AppResult<Pet> {
        self.uow
            .pets()
            .update(pet_id(id)?, input)
            .await
            .inspect_err(|e| tracing::debug!("Failed to update pet with ID {}: {}", id, e))
    }

    async fn delete(&self, id: &str) -> AppResult<Pet> {
        self.uow
            .pets()
            .delete(pet_id(id)?)
            .await
            .inspect_err(|e| tracing::debug!("Failed to delete pet with ID {}: {}", id, e))
    }
}
