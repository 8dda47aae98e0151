//! Role repository with soft delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::base::find_active;
use super::entities::role::{self, ActiveModel, Entity as RoleEntity};
use crate::domain::{Role, RoleInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Role>>;

    async fn list(&self) -> AppResult<Vec<Role>>;

    async fn create(&self, input: RoleInput) -> AppResult<Role>;

    async fn update(&self, id: i32, input: RoleInput) -> AppResult<Role>;

    /// Soft delete; returns the row as it was before deletion
    async fn delete(&self, id: i32) -> AppResult<Role>;
}

pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn tx_create(txn: &DatabaseTransaction, input: RoleInput) -> AppResult<i32> {
        let now = chrono::Utc::now();
        let model = ActiveModel {
            name: Set(input.name),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        Ok(model.id)
    }

    async fn tx_update(txn: &DatabaseTransaction, id: i32, input: RoleInput) -> AppResult<()> {
        let existing = find_active::<RoleEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.updated_at = Set(chrono::Utc::now());
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_delete(txn: &DatabaseTransaction, id: i32) -> AppResult<Role> {
        let existing = find_active::<RoleEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        let snapshot = Role::from(existing.clone());

        let mut active: ActiveModel = existing.into();
        active.deleted_at = Set(Some(chrono::Utc::now()));
        active.update(txn).await?;
        Ok(snapshot)
    }
}

#[async_trait]
impl RoleRepository for RoleStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Role>> {
        let result = find_active::<RoleEntity, _>(&self.db, id).await?;
        Ok(result.map(Role::from))
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find()
            .filter(role::Column::DeletedAt.is_null())
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Role::from).collect())
    }

    async fn create(&self, input: RoleInput) -> AppResult<Role> {
        let id = with_transaction!(&self.db, |txn| Self::tx_create(&txn, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: i32, input: RoleInput) -> AppResult<Role> {
        with_transaction!(&self.db, |txn| Self::tx_update(&txn, id, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<Role> {
        with_transaction!(&self.db, |txn| Self::tx_delete(&txn, id))
    }
}
