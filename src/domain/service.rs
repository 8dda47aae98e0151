//! Billable clinic services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{validation, Category, Department, User};

/// Service entity with its category and the users and departments offering it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i32,
    #[schema(example = "Вакцинация")]
    pub name: String,
    #[schema(example = 2500.0)]
    pub price: f64,
    pub category_id: Option<i32>,
    pub category: Option<Category>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub departments: Vec<Department>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    #[serde(default)]
    #[validate(
        custom(function = "validation::required_ru_print_ascii"),
        length(max = 255)
    )]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category_id: i32,
}
