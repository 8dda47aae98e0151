//! `pet_master` table.

use sea_orm::entity::prelude::*;

use crate::domain::Pet;
use crate::infra::repositories::base::SoftDelete;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pet_master")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub breed: String,
    pub colour: String,
    pub sex: String,
    pub client_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDelete for Entity {
    fn deleted_at() -> Column {
        Column::DeletedAt
    }
}

impl From<Model> for Pet {
    fn from(model: Model) -> Self {
        Pet {
            id: model.id,
            name: model.name,
            kind: model.kind,
            breed: model.breed,
            colour: model.colour,
            sex: model.sex,
            client_id: model.client_id,
            client: None,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
