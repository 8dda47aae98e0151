//! Pets, each belonging to a client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{validation, Client};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub breed: String,
    pub colour: String,
    pub sex: String,
    pub client_id: Option<i32>,
    pub client: Option<Client>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PetInput {
    #[validate(custom(function = "validation::optional_ru_alpha"), length(max = 255))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub kind: String,
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub breed: String,
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub colour: String,
    #[validate(custom(function = "validation::optional_ru_alpha"))]
    pub sex: String,
    pub client_id: i32,
}
