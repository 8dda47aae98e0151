//! Clinic clients (pet owners).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: i32,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub sex: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: String,
    pub email: String,
    pub info: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientInput {
    #[validate(custom(function = "validation::optional_ru_alpha"), length(max = 255))]
    pub surname: String,
    #[validate(custom(function = "validation::optional_ru_alpha"), length(max = 255))]
    pub name: String,
    #[validate(custom(function = "validation::optional_ru_alpha"), length(max = 255))]
    pub patronymic: String,
    #[validate(custom(function = "validation::optional_ru_alpha"))]
    pub sex: String,
    #[schema(value_type = Option<String>, format = Date, example = "1991-01-01")]
    pub birth_date: Option<NaiveDate>,
    /// E.164 phone number
    #[validate(custom(function = "validation::e164"))]
    #[schema(example = "+79876543210")]
    pub phone: String,
    #[validate(custom(function = "validation::email"))]
    #[schema(example = "mail@mail.com")]
    pub email: String,
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub info: String,
}
