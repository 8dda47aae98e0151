//! `client_master` table.

use sea_orm::entity::prelude::*;

use crate::domain::Client;
use crate::infra::repositories::base::SoftDelete;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "client_master")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub sex: String,
    pub birth_date: Option<Date>,
    pub phone: String,
    pub email: String,
    pub info: String,
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

impl From<Model> for Client {
    fn from(model: Model) -> Self {
        Client {
            id: model.id,
            surname: model.surname,
            name: model.name,
            patronymic: model.patronymic,
            sex: model.sex,
            birth_date: model.birth_date,
            phone: model.phone,
            email: model.email,
            info: model.info,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
