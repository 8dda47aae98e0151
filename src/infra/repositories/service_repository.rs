//! Service repository with soft delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use super::base::{find_active, find_optional, load_all, require};
use super::entities::{
    category::Entity as CategoryEntity,
    department,
    service::{self, ActiveModel, Entity as ServiceEntity},
    user,
};
use crate::domain::{Category, Department, Service, ServiceInput, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Find a live service with its category, users and departments
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Service>>;

    async fn list(&self) -> AppResult<Vec<Service>>;

    /// Create a service; the category must exist
    async fn create(&self, input: ServiceInput) -> AppResult<Service>;

    async fn update(&self, id: i32, input: ServiceInput) -> AppResult<Service>;

    async fn delete(&self, id: i32) -> AppResult<Service>;
}

pub struct ServiceStore {
    db: DatabaseConnection,
}

/// Attach the direct relations of a service row.
async fn load_service<C: ConnectionTrait>(
    conn: &C,
    model: service::Model,
) -> AppResult<Service> {
    let category = find_optional::<CategoryEntity, _>(conn, model.category_id).await?;
    let users = model
        .find_related(user::Entity)
        .filter(user::Column::DeletedAt.is_null())
        .all(conn)
        .await?;
    let departments = model
        .find_related(department::Entity)
        .filter(department::Column::DeletedAt.is_null())
        .all(conn)
        .await?;

    let mut service = Service::from(model);
    service.category = category.map(Category::from);
    service.users = users.into_iter().map(User::from).collect();
    service.departments = departments.into_iter().map(Department::from).collect();
    Ok(service)
}

impl ServiceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn tx_create(txn: &DatabaseTransaction, input: ServiceInput) -> AppResult<i32> {
        require::<CategoryEntity, _>(txn, input.category_id).await?;

        let now = chrono::Utc::now();
        let model = ActiveModel {
            name: Set(input.name),
            price: Set(input.price),
            category_id: Set(Some(input.category_id)),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        Ok(model.id)
    }

    async fn tx_update(txn: &DatabaseTransaction, id: i32, input: ServiceInput) -> AppResult<()> {
        let existing = find_active::<ServiceEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        require::<CategoryEntity, _>(txn, input.category_id).await?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.price = Set(input.price);
        active.category_id = Set(Some(input.category_id));
        active.updated_at = Set(chrono::Utc::now());
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_delete(txn: &DatabaseTransaction, id: i32) -> AppResult<Service> {
        let existing = find_active::<ServiceEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        let snapshot = load_service(txn, existing.clone()).await?;

        let mut active: ActiveModel = existing.into();
        active.deleted_at = Set(Some(chrono::Utc::now()));
        active.update(txn).await?;
        Ok(snapshot)
    }
}

#[async_trait]
impl ServiceRepository for ServiceStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Service>> {
        match find_active::<ServiceEntity, _>(&self.db, id).await? {
            Some(model) => Ok(Some(load_service(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> AppResult<Vec<Service>> {
        let models = ServiceEntity::find()
            .filter(service::Column::DeletedAt.is_null())
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        load_all(models, |model| load_service(&self.db, model)).await
    }

    async fn create(&self, input: ServiceInput) -> AppResult<Service> {
        let id = with_transaction!(&self.db, |txn| Self::tx_create(&txn, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: i32, input: ServiceInput) -> AppResult<Service> {
        with_transaction!(&self.db, |txn| Self::tx_update(&txn, id, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<Service> {
        with_transaction!(&self.db, |txn| Self::tx_delete(&txn, id))
    }
}
