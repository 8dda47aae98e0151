//! `lead_master` table.

use sea_orm::entity::prelude::*;

use crate::domain::Lead;
use crate::infra::repositories::base::SoftDelete;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lead_master")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub comment: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub status: String,
    pub doctor_id: Option<i32>,
    pub last_updated_by_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDelete for Entity {
    fn deleted_at() -> Column {
        Column::DeletedAt
    }
}

impl From<Model> for Lead {
    fn from(model: Model) -> Self {
        Lead {
            id: model.id,
            name: model.name,
            phone: model.phone,
            email: model.email,
            comment: model.comment,
            kind: model.kind,
            status: model.status,
            doctor_id: model.doctor_id,
            doctor: None,
            last_updated_by_id: model.last_updated_by_id,
            last_updated_by: None,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
