//! `visit_master` table.

use sea_orm::entity::prelude::*;

use crate::domain::Visit;
use crate::infra::repositories::base::SoftDelete;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "visit_master")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_time: DateTimeUtc,
    pub info: String,
    pub client_id: Option<i32>,
    pub pet_id: Option<i32>,
    pub doctor_id: Option<i32>,
    pub service_id: Option<i32>,
    pub last_updated_by_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

// Doctor and last editor both point at user_master, so relations are
// resolved by id in the repository.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDelete for Entity {
    fn deleted_at() -> Column {
        Column::DeletedAt
    }
}

impl From<Model> for Visit {
    fn from(model: Model) -> Self {
        Visit {
            id: model.id,
            date_time: model.date_time,
            info: model.info,
            client_id: model.client_id,
            client: None,
            pet_id: model.pet_id,
            pet: None,
            doctor_id: model.doctor_id,
            doctor: None,
            service_id: model.service_id,
            service: None,
            last_updated_by_id: model.last_updated_by_id,
            last_updated_by: None,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
