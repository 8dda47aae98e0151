//! Department repository with soft delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use super::base::{exists, filter_existing, find_active, load_all};
use super::entities::{
    department::{self, ActiveModel, Entity as DepartmentEntity},
    departments_services, service, user,
};
use crate::domain::{slug, Department, DepartmentInput, Service, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Department repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find a live department with its users and services
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Department>>;

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Department>>;

    async fn list(&self) -> AppResult<Vec<Department>>;

    /// Create a department and attach the services that exist
    async fn create(&self, input: DepartmentInput) -> AppResult<Department>;

    /// Update name and slug, replacing the service set
    async fn update(&self, id: i32, input: DepartmentInput) -> AppResult<Department>;

    async fn delete(&self, id: i32) -> AppResult<Department>;
}

pub struct DepartmentStore {
    db: DatabaseConnection,
}

async fn load_department<C: ConnectionTrait>(
    conn: &C,
    model: department::Model,
) -> AppResult<Department> {
    let users = model
        .find_related(user::Entity)
        .filter(user::Column::DeletedAt.is_null())
        .all(conn)
        .await?;
    let services = model
        .find_related(service::Entity)
        .filter(service::Column::DeletedAt.is_null())
        .all(conn)
        .await?;

    let mut department = Department::from(model);
    department.users = users.into_iter().map(User::from).collect();
    department.services = services.into_iter().map(Service::from).collect();
    Ok(department)
}

/// Overwrite the service set of a department.
async fn replace_services(
    txn: &DatabaseTransaction,
    department_id: i32,
    requested: &[i32],
) -> AppResult<()> {
    let ids = filter_existing(requested, |id| exists::<service::Entity, _>(txn, id)).await;

    departments_services::Entity::delete_many()
        .filter(departments_services::Column::DepartmentId.eq(department_id))
        .exec(txn)
        .await?;

    if ids.is_empty() {
        return Ok(());
    }
    let rows = ids.into_iter().map(|service_id| departments_services::ActiveModel {
        department_id: Set(department_id),
        service_id: Set(service_id),
    });
    departments_services::Entity::insert_many(rows)
        .exec(txn)
        .await?;
    Ok(())
}

impl DepartmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn tx_create(txn: &DatabaseTransaction, input: DepartmentInput) -> AppResult<i32> {
        let now = chrono::Utc::now();
        let model = ActiveModel {
            slug: Set(slug::make(&input.name)),
            name: Set(input.name),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        replace_services(txn, model.id, &input.services).await?;
        Ok(model.id)
    }

    async fn tx_update(
        txn: &DatabaseTransaction,
        id: i32,
        input: DepartmentInput,
    ) -> AppResult<()> {
        let existing = find_active::<DepartmentEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;

        replace_services(txn, id, &input.services).await?;

        let mut active: ActiveModel = existing.into();
        active.slug = Set(slug::make(&input.name));
        active.name = Set(input.name);
        active.updated_at = Set(chrono::Utc::now());
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_delete(txn: &DatabaseTransaction, id: i32) -> AppResult<Department> {
        let existing = find_active::<DepartmentEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        let snapshot = load_department(txn, existing.clone()).await?;

        let mut active: ActiveModel = existing.into();
        active.deleted_at = Set(Some(chrono::Utc::now()));
        active.update(txn).await?;
        Ok(snapshot)
    }
}

#[async_trait]
impl DepartmentRepository for DepartmentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Department>> {
        match find_active::<DepartmentEntity, _>(&self.db, id).await? {
            Some(model) => Ok(Some(load_department(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Department>> {
        let result = DepartmentEntity::find()
            .filter(department::Column::Slug.eq(slug))
            .filter(department::Column::DeletedAt.is_null())
            .order_by_asc(department::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match result {
            Some(model) => Ok(Some(load_department(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> AppResult<Vec<Department>> {
        let models = DepartmentEntity::find()
            .filter(department::Column::DeletedAt.is_null())
            .order_by_asc(department::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        load_all(models, |model| load_department(&self.db, model)).await
    }

    async fn create(&self, input: DepartmentInput) -> AppResult<Department> {
        let id = with_transaction!(&self.db, |txn| Self::tx_create(&txn, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update(&self, id: i32, input: DepartmentInput) -> AppResult<Department> {
        with_transaction!(&self.db, |txn| Self::tx_update(&txn, id, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn delete(&self, id: i32) -> AppResult<Department> {
        with_transaction!(&self.db, |txn| Self::tx_delete(&txn, id))
    }
}
