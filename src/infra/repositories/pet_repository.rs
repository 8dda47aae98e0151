//! Pet repository with soft delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::base::{find_active, find_optional, load_all, require};
use super::entities::{
    client::Entity as ClientEntity,
    pet::{self, ActiveModel, Entity as PetEntity},
};
use crate::domain::{Client, Pet, PetInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Pet repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Find a live pet with its owner
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Pet>>;

    async fn list(&self) -> AppResult<Vec<Pet>>;

    /// Create a pet; the owning client must exist
    async fn create(&self, input: PetInput) -> AppResult<Pet>;

    async fn update(&self, id: i32, input: PetInput) -> AppResult<Pet>;

    async fn delete(&self, id: i32) -> AppResult<Pet>;
}

pub struct PetStore {
    db: DatabaseConnection,
}

async fn load_pet<C: ConnectionTrait>(conn: &C, model: pet::Model) -> AppResult<Pet> {
    let client = find_optional::<ClientEntity, _>(conn, model.client_id).await?;
    let mut pet = Pet::from(model);
    pet.client = client.map(Client::from);
    Ok(pet)
}

fn apply(active: &mut ActiveModel, input: PetInput) {
    active.name = Set(input.name);
    active.kind = Set(input.kind);
    active.breed = Set(input.breed);
    active.colour = Set(input.colour);
    active.sex = Set(input.sex);
    active.client_id = Set(Some(input.client_id));
}

impl PetStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn tx_create(txn: &DatabaseTransaction, input: PetInput) -> AppResult<i32> {
        require::<ClientEntity, _>(txn, input.client_id).await?;

        let now = chrono::Utc::now();
        let mut active = ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };
        apply(&mut active, input);

        let model = active.insert(txn).await?;
        Ok(model.id)
    }

    async fn tx_update(txn: &DatabaseTransaction, id: i32, input: PetInput) -> AppResult<()> {
        let existing = find_active::<PetEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        require::<ClientEntity, _>(txn, input.client_id).await?;

        let mut active: ActiveModel = existing.into();
        apply(&mut active, input);
        active.updated_at = Set(chrono::Utc::now());
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_delete(txn: &DatabaseTransaction, id: i32) -> AppResult<Pet> {
        let existing = find_active::<PetEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        let snapshot = load_pet(txn, existing.clone()).await?;

        let mut active: ActiveModel = existing.into();
        active.deleted_at = Set(Some(chrono::Utc::now()));
        active.update(txn).await?;
        Ok(snapshot)
    }
}

#[async_trait]
impl PetRepository for PetStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Pet>> {
        match find_active::<PetEntity, _>(&self.db, id).await? {
            Some(model) => Ok(Some(load_pet(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> AppResult<Vec<Pet>> {
        let models = PetEntity::find()
            .filter(pet::Column::DeletedAt.is_null())
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        load_all(models, |model| load_pet(&self.db, model)).await
    }

    async fn create(&self, input: PetInput) -> AppResult<Pet> {
        let id = with_transaction!(&self.db, |txn| Self::tx_create(&txn, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: i32, input: PetInput) -> AppResult<Pet> {
        with_transaction!(&self.db, |txn| Self::tx_update(&txn, id, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<Pet> {
        with_transaction!(&self.db, |txn| Self::tx_delete(&txn, id))
    }
}
