//! Sales leads submitted from the public site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{validation, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub comment: String,
    /// in clinic, online, callback
    #[serde(rename = "type")]
    pub kind: String,
    /// open, in_progress, closed, rejected
    pub status: String,
    pub doctor_id: Option<i32>,
    pub doctor: Option<User>,
    pub last_updated_by_id: Option<i32>,
    pub last_updated_by: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadInput {
    #[validate(custom(function = "validation::optional_ru_alpha"), length(max = 255))]
    pub name: String,
    #[validate(custom(function = "validation::optional_e164"))]
    #[schema(example = "+79876543210")]
    pub phone: String,
    #[validate(custom(function = "validation::optional_email"))]
    #[schema(example = "mail@mail.com")]
    pub email: String,
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub comment: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub kind: String,
    /// Ignored on create, where the status is always `open`
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub status: String,
    pub doctor_id: i32,
    #[serde(skip)]
    pub last_updated_by_id: i32,
}
