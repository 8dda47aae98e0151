//! User repository with soft delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use super::base::{exists, filter_existing, find_active, find_optional, load_all, require};
use super::entities::{
    department,
    role::Entity as RoleEntity,
    service,
    user::{self, nullable, ActiveModel, Entity as UserEntity},
    users_departments, users_services,
};
use crate::domain::{slug, Department, NewUser, Role, Service, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// All queries exclude soft-deleted records.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a live user with role, departments and services
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<User>>;

    /// Match on username, then e-mail, then phone
    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>>;

    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert an active user; the slug starts out as the id
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Write the columns a user may change on their own profile
    async fn update_profile(&self, id: i32, input: UpdateUser) -> AppResult<User>;

    /// Write every editable column and replace departments and services
    async fn update_by_owner(&self, id: i32, input: UpdateUser) -> AppResult<User>;

    async fn change_password(&self, id: i32, password_hash: String) -> AppResult<()>;

    async fn delete(&self, id: i32) -> AppResult<User>;
}

pub struct UserStore {
    db: DatabaseConnection,
}

async fn load_user<C: ConnectionTrait>(conn: &C, model: user::Model) -> AppResult<User> {
    let role = find_optional::<RoleEntity, _>(conn, model.role_id).await?;
    let departments = model
        .find_related(department::Entity)
        .filter(department::Column::DeletedAt.is_null())
        .all(conn)
        .await?;
    let services = model
        .find_related(service::Entity)
        .filter(service::Column::DeletedAt.is_null())
        .all(conn)
        .await?;

    let mut user = User::from(model);
    user.role = role.map(Role::from);
    user.departments = departments.into_iter().map(Department::from).collect();
    user.services = services.into_iter().map(Service::from).collect();
    Ok(user)
}

/// Columns shared by both update paths.
fn apply_profile(active: &mut ActiveModel, id: i32, input: &UpdateUser) {
    active.email = Set(nullable(input.email.clone()));
    active.phone = Set(nullable(input.phone.clone()));
    active.surname = Set(input.surname.clone());
    active.name = Set(input.name.clone());
    active.patronymic = Set(input.patronymic.clone());
    active.sex = Set(input.sex.clone());
    active.birth_date = Set(input.birth_date);
    active.slug = Set(slug::for_user(
        id,
        &input.surname,
        &input.name,
        &input.patronymic,
    ));
    active.updated_at = Set(chrono::Utc::now());
}

async fn replace_departments(
    txn: &DatabaseTransaction,
    user_id: i32,
    requested: &[i32],
) -> AppResult<()> {
    let ids = filter_existing(requested, |id| exists::<department::Entity, _>(txn, id)).await;

    users_departments::Entity::delete_many()
        .filter(users_departments::Column::UserId.eq(user_id))
        .exec(txn)
        .await?;

    if ids.is_empty() {
        return Ok(());
    }
    let rows = ids.into_iter().map(|department_id| users_departments::ActiveModel {
        user_id: Set(user_id),
        department_id: Set(department_id),
    });
    users_departments::Entity::insert_many(rows).exec(txn).await?;
    Ok(())
}

async fn replace_services(
    txn: &DatabaseTransaction,
    user_id: i32,
    requested: &[i32],
) -> AppResult<()> {
    let ids = filter_existing(requested, |id| exists::<service::Entity, _>(txn, id)).await;

    users_services::Entity::delete_many()
        .filter(users_services::Column::UserId.eq(user_id))
        .exec(txn)
        .await?;

    if ids.is_empty() {
        return Ok(());
    }
    let rows = ids.into_iter().map(|service_id| users_services::ActiveModel {
        user_id: Set(user_id),
        service_id: Set(service_id),
    });
    users_services::Entity::insert_many(rows).exec(txn).await?;
    Ok(())
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_one(&self, column: user::Column, value: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(column.eq(value))
            .filter(user::Column::DeletedAt.is_null())
            .order_by_asc(user::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match result {
            Some(model) => Ok(Some(load_user(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn tx_create(txn: &DatabaseTransaction, new_user: NewUser) -> AppResult<i32> {
        require::<RoleEntity, _>(txn, new_user.role_id).await?;

        let now = chrono::Utc::now();
        let model = ActiveModel {
            username: Set(new_user.username),
            active: Set(true),
            password: Set(new_user.password_hash),
            role_id: Set(Some(new_user.role_id)),
            email: Set(None),
            phone: Set(None),
            surname: Set(String::new()),
            name: Set(String::new()),
            patronymic: Set(String::new()),
            sex: Set(String::new()),
            birth_date: Set(None),
            profession: Set(String::new()),
            info: Set(String::new()),
            slug: Set(String::new()),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        let id = model.id;
        let mut active: ActiveModel = model.into();
        active.slug = Set(id.to_string());
        active.update(txn).await?;
        Ok(id)
    }

    async fn tx_update_profile(
        txn: &DatabaseTransaction,
        id: i32,
        input: UpdateUser,
    ) -> AppResult<()> {
        let existing = find_active::<UserEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = existing.into();
        apply_profile(&mut active, id, &input);
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_update_by_owner(
        txn: &DatabaseTransaction,
        id: i32,
        input: UpdateUser,
    ) -> AppResult<()> {
        let existing = find_active::<UserEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        require::<RoleEntity, _>(txn, input.role_id).await?;

        replace_departments(txn, id, &input.departments).await?;
        replace_services(txn, id, &input.services).await?;

        let mut active: ActiveModel = existing.into();
        apply_profile(&mut active, id, &input);
        active.active = Set(input.active);
        active.profession = Set(input.profession);
        active.info = Set(input.info);
        active.role_id = Set(Some(input.role_id));
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_change_password(
        txn: &DatabaseTransaction,
        id: i32,
        password_hash: String,
    ) -> AppResult<()> {
        let existing = find_active::<UserEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = existing.into();
        active.password = Set(password_hash);
        active.updated_at = Set(chrono::Utc::now());
        active.update(txn).await?;
        Ok(())
    }

    async fn tx_delete(txn: &DatabaseTransaction, id: i32) -> AppResult<User> {
        let existing = find_active::<UserEntity, _>(txn, id)
            .await?
            .ok_or_not_found()?;
        let snapshot = load_user(txn, existing.clone()).await?;

        let mut active: ActiveModel = existing.into();
        active.deleted_at = Set(Some(chrono::Utc::now()));
        active.update(txn).await?;
        Ok(snapshot)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        match find_active::<UserEntity, _>(&self.db, id).await? {
            Some(model) => Ok(Some(load_user(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<User>> {
        self.find_one(user::Column::Slug, slug).await
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        for column in [user::Column::Username, user::Column::Email, user::Column::Phone] {
            if let Some(user) = self.find_one(column, login).await? {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::DeletedAt.is_null())
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        load_all(models, |model| load_user(&self.db, model)).await
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let id = with_transaction!(&self.db, |txn| Self::tx_create(&txn, new_user))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_profile(&self, id: i32, input: UpdateUser) -> AppResult<User> {
        with_transaction!(&self.db, |txn| Self::tx_update_profile(&txn, id, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_by_owner(&self, id: i32, input: UpdateUser) -> AppResult<User> {
        with_transaction!(&self.db, |txn| Self::tx_update_by_owner(&txn, id, input))?;
        self.find_by_id(id).await?.ok_or_not_found()
    }

    async fn change_password(&self, id: i32, password_hash: String) -> AppResult<()> {
        with_transaction!(&self.db, |txn| Self::tx_change_password(&txn, id, password_hash))
    }

    async fn delete(&self, id: i32) -> AppResult<User> {
        with_transaction!(&self.db, |txn| Self::tx_delete(&txn, id))
    }
}
