//! `department_master` table.

use sea_orm::entity::prelude::*;

use crate::domain::Department;
use crate::infra::repositories::base::SoftDelete;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "department_master")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub slug: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_departments::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_departments::Relation::Department.def().rev())
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        super::departments_services::Relation::Service.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::departments_services::Relation::Department.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDelete for Entity {
    fn deleted_at() -> Column {
        Column::DeletedAt
    }
}

impl From<Model> for Department {
    fn from(model: Model) -> Self {
        Department {
            id: model.id,
            name: model.name,
            slug: model.slug,
            users: Vec::new(),
            services: Vec::new(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
