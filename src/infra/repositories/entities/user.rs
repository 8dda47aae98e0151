//! `user_master` table.

use sea_orm::entity::prelude::*;

use crate::domain::User;
use crate::infra::repositories::base::SoftDelete;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_master")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: Option<String>,
    #[sea_orm(unique)]
    pub phone: Option<String>,
    pub active: bool,
    pub password: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub sex: String,
    pub birth_date: Option<Date>,
    pub profession: String,
    pub info: String,
    pub slug: String,
    pub role_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_departments::Relation::Department.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_departments::Relation::User.def().rev())
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_services::Relation::Service.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_services::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDelete for Entity {
    fn deleted_at() -> Column {
        Column::DeletedAt
    }
}

/// Empty strings are stored as NULL in the unique contact columns.
pub(crate) fn nullable(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            username: model.username,
            email: model.email.unwrap_or_default(),
            phone: model.phone.unwrap_or_default(),
            active: model.active,
            password_hash: model.password,
            surname: model.surname,
            name: model.name,
            patronymic: model.patronymic,
            sex: model.sex,
            birth_date: model.birth_date,
            profession: model.profession,
            info: model.info,
            slug: model.slug,
            role_id: model.role_id,
            role: None,
            departments: Vec::new(),
            services: Vec::new(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
