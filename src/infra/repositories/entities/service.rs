//! `service_master` table.

use sea_orm::entity::prelude::*;

use crate::domain::Service;
use crate::infra::repositories::base::SoftDelete;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service_master")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub price: f64,
    pub category_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::users_services::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::users_services::Relation::Service.def().rev())
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        super::departments_services::Relation::Department.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::departments_services::Relation::Service.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDelete for Entity {
    fn deleted_at() -> Column {
        Column::DeletedAt
    }
}

/// Scalar columns only; relations are attached by the repository.
impl From<Model> for Service {
    fn from(model: Model) -> Self {
        Service {
            id: model.id,
            name: model.name,
            price: model.price,
            category_id: model.category_id,
            category: None,
            users: Vec::new(),
            departments: Vec::new(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
