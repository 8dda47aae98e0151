//! Visit repository with soft delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::base::{find_active, find_optional, load_all, require};
use super::entities::{
    client::Entity as ClientEntity,
    pet::Entity as PetEntity,
    service::Entity as ServiceEntity,
    user::Entity as UserEntity,
    visit::{self, ActiveModel, Entity as VisitEntity},
};
use crate::domain::{Client, Pet, Service, User, Visit, VisitInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Visit repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait VisitRepository: Send + Sync {
    /// Find a live visit with client, pet, doctor, service and last editor
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Visit>>;

    async fn list(&self) -> AppResult<Vec<Visit>>;

    /// Create a visit; every referenced row must exist
    async fn create(&self, input: VisitInput) -> AppResult<Visit>;

    async fn update(&self, id: i32, input: VisitInput) -> AppResult<Visit>;

    async fn delete(&self, id: i32) -> AppResult<Visit>;
}

pub struct VisitStore {
    db: DatabaseConnection,
}

async fn load_visit<C: ConnectionTrait>(
    conn: &C,
    model: visit::Model,
) -> AppResult<Visit> {
    let client = find_optional::<ClientEntity, _>(conn, model.client_id).await?;
    let pet = find_optional::<PetEntity, _>(conn, model.pet_id).await?;
    let doctor = find_optional::<UserEntity, _>(conn, model.doctor_id).await?;
    let service = find_optional::<ServiceEntity, _>(conn, model.service_id).await?;
    let last_updated_by = find_optional::<UserEntity, _>(conn, model.last_updated_by_id).await?;

    let mut visit = Visit::from(model);
    visit.client = client.map(Client::from);
    visit.pet = pet.map(Pet::from);
    visit.doctor = doctor.map(User::from);
    visit.service = service.map(Service::from);
    visit.last_updated_by = last_updated_by.map(User::from);
    Ok(visit)
}

async fn check_references(txn: &DatabaseTransaction, input: &VisitInput) -> AppResult<()> {
    require::<ClientEntity, _>(txn, input.client_id).await?;
    require::<PetEntity, _>(txn, input.pet_id).await?;
    require::<UserEntity, _>(txn, input.doctor_id).await?;
    require::<UserEntity, _>(txn, input.last_updated_by_id).await?;
    require::<ServiceEntity, _>(txn, input.service_id).await
}

fn apply(active: &mut ActiveModel, input: VisitInput) {
    active.date_time = Set(input.date_time);
    active.info = Set(input.info);
    active.client_id = Set(Some(input.client_id));
    active.pet_id = Set(Some(input.pet_id));
    active.doctor_id = Set(Some(input.doctor_id));
    active.last_updated_by_id = Set(Some(input.last_updated_by_id));
    active.service_id = Set(Some(input.service_id));
}

impl VisitStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn tx_create(txn: &DatabaseTransaction, input: VisitInput) -> AppResult<i32> {
        check_references(txn, &input).await?;

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

    async fn tx_update(txn: &DatabaseTransaction, id: i32, input: VisitInput) -> AppResult<()> {
        let existing = find_active::<VisitEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        check_references(txn, &input).await?;

        let mut active: ActiveModel = existing.into();
        apply(&mut active, input);
        active.updated_at = Set(chrono::Utc::now());
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_delete(txn: &DatabaseTransaction, id: i32) -> AppResult<Visit> {
        let existing = find_active::<VisitEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        let snapshot = load_visit(txn, existing.clone()).await?;

        let mut active: ActiveModel = existing.into();
        active.deleted_at = Set(Some(chrono::Utc::now()));
        active.update(txn).await?;
        Ok(snapshot)
    }
}

#[async_trait]
impl VisitRepository for VisitStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Visit>> {
        match find_active::<VisitEntity, _>(&self.db, id).await? {
            Some(model) => Ok(Some(load_visit(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> AppResult<Vec<Visit>> {
        let models = VisitEntity::find()
            .filter(visit::Column::DeletedAt.is_null())
            .order_by_asc(visit::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        load_all(models, |model| load_visit(&self.db, model)).await
    }

    async fn create(&self, input: VisitInput) -> AppResult<Visit> {
        let id = with_transaction!(&self.db, |txn| Self::tx_create(&txn, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: i32, input: VisitInput) -> AppResult<Visit> {
        with_transaction!(&self.db, |txn| Self::tx_update(&txn, id, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<Visit> {
        with_transaction!(&self.db, |txn| Self::tx_delete(&txn, id))
    }
}
