//! Lead repository with soft delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::base::{find_active, find_optional, load_all, require};
use super::entities::{
    lead::{self, ActiveModel, Entity as LeadEntity},
    user::Entity as UserEntity,
};
use crate::config::LEAD_STATUS_OPEN;
use crate::domain::{Lead, LeadInput, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Lead repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Lead>>;

    async fn list(&self) -> AppResult<Vec<Lead>>;

    /// Create an open lead assigned to an existing doctor
    async fn create(&self, input: LeadInput) -> AppResult<Lead>;

    /// Update every column including status and last editor
    async fn update(&self, id: i32, input: LeadInput) -> AppResult<Lead>;

    async fn delete(&self, id: i32) -> AppResult<Lead>;
}

pub struct LeadStore {
    db: DatabaseConnection,
}

async fn load_lead<C: ConnectionTrait>(conn: &C, model: lead::Model) -> AppResult<Lead> {
    let doctor = find_optional::<UserEntity, _>(conn, model.doctor_id).await?;
    let last_updated_by = find_optional::<UserEntity, _>(conn, model.last_updated_by_id).await?;

    let mut lead = Lead::from(model);
    lead.doctor = doctor.map(User::from);
    lead.last_updated_by = last_updated_by.map(User::from);
    Ok(lead)
}

fn apply(active: &mut ActiveModel, input: LeadInput) {
    active.name = Set(input.name);
    active.phone = Set(input.phone);
    active.email = Set(input.email);
    active.comment = Set(input.comment);
    active.kind = Set(input.kind);
    active.status = Set(input.status);
    active.doctor_id = Set(Some(input.doctor_id));
}

impl LeadStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn tx_create(txn: &DatabaseTransaction, mut input: LeadInput) -> AppResult<i32> {
        require::<UserEntity, _>(txn, input.doctor_id).await?;

        input.status = LEAD_STATUS_OPEN.to_string();
        let now = chrono::Utc::now();
        let mut active = ActiveModel {
            last_updated_by_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };
        apply(&mut active, input);

        let model = active.insert(txn).await?;
        Ok(model.id)
    }

    async fn tx_update(txn: &DatabaseTransaction, id: i32, input: LeadInput) -> AppResult<()> {
        let existing = find_active::<LeadEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        require::<UserEntity, _>(txn, input.doctor_id).await?;
        require::<UserEntity, _>(txn, input.last_updated_by_id).await?;

        let last_updated_by_id = input.last_updated_by_id;
        let mut active: ActiveModel = existing.into();
        apply(&mut active, input);
        active.last_updated_by_id = Set(Some(last_updated_by_id));
        active.updated_at = Set(chrono::Utc::now());
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_delete(txn: &DatabaseTransaction, id: i32) -> AppResult<Lead> {
        let existing = find_active::<LeadEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        let snapshot = load_lead(txn, existing.clone()).await?;

        let mut active: ActiveModel = existing.into();
        active.deleted_at = Set(Some(chrono::Utc::now()));
        active.update(txn).await?;
        Ok(snapshot)
    }
}

#[async_trait]
impl LeadRepository for LeadStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Lead>> {
        match find_active::<LeadEntity, _>(&self.db, id).await? {
            Some(model) => Ok(Some(load_lead(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> AppResult<Vec<Lead>> {
        let models = LeadEntity::find()
            .filter(lead::Column::DeletedAt.is_null())
            .order_by_asc(lead::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        load_all(models, |model| load_lead(&self.db, model)).await
    }

    async fn create(&self, input: LeadInput) -> AppResult<Lead> {
        let id = with_transaction!(&self.db, |txn| Self::tx_create(&txn, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: i32, input: LeadInput) -> AppResult<Lead> {
        with_transaction!(&self.db, |txn| Self::tx_update(&txn, id, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<Lead> {
        with_transaction!(&self.db, |txn| Self::tx_delete(&txn, id))
    }
}
