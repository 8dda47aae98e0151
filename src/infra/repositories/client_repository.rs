//! Client repository with soft delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::base::find_active;
use super::entities::client::{self, ActiveModel, Entity as ClientEntity};
use crate::domain::{Client, ClientInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Client repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Client>>;

    async fn list(&self) -> AppResult<Vec<Client>>;

    async fn create(&self, input: ClientInput) -> AppResult<Client>;

    async fn update(&self, id: i32, input: ClientInput) -> AppResult<Client>;

    async fn delete(&self, id: i32) -> AppResult<Client>;
}

pub struct ClientStore {
    db: DatabaseConnection,
}

fn apply(active: &mut ActiveModel, input: ClientInput) {
    active.surname = Set(input.surname);
    active.name = Set(input.name);
    active.patronymic = Set(input.patronymic);
    active.sex = Set(input.sex);
    active.birth_date = Set(input.birth_date);
    active.phone = Set(input.phone);
    active.email = Set(input.email);
    active.info = Set(input.info);
}

impl ClientStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn tx_create(txn: &DatabaseTransaction, input: ClientInput) -> AppResult<i32> {
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

    async fn tx_update(txn: &DatabaseTransaction, id: i32, input: ClientInput) -> AppResult<()> {
        let existing = find_active::<ClientEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = existing.into();
        apply(&mut active, input);
        active.updated_at = Set(chrono::Utc::now());
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_delete(txn: &DatabaseTransaction, id: i32) -> AppResult<Client> {
        let existing = find_active::<ClientEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        let snapshot = Client::from(existing.clone());

        let mut active: ActiveModel = existing.into();
        active.deleted_at = Set(Some(chrono::Utc::now()));
        active.update(txn).await?;
        Ok(snapshot)
    }
}

#[async_trait]
impl ClientRepository for ClientStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Client>> {
        let result = find_active::<ClientEntity, _>(&self.db, id).await?;
        Ok(result.map(Client::from))
    }

    async fn list(&self) -> AppResult<Vec<Client>> {
        let models = ClientEntity::find()
            .filter(client::Column::DeletedAt.is_null())
            .order_by_asc(client::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Client::from).collect())
    }

    async fn create(&self, input: ClientInput) -> AppResult<Client> {
        let id = with_transaction!(&self.db, |txn| Self::tx_create(&txn, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: i32, input: ClientInput) -> AppResult<Client> {
        with_transaction!(&self.db, |txn| Self::tx_update(&txn, id, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<Client> {
        with_transaction!(&self.db, |txn| Self::tx_delete(&txn, id))
    }
}
