//! Clinic departments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{validation, Service, User};

/// Department entity, addressable by id or by slug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i32,
    #[schema(example = "Терапия")]
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub services: Vec<Service>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentInput {
    #[serde(default)]
    #[validate(custom(function = "validation::ru_alpha"), length(max = 255))]
    pub name: String,
    /// Service ids; unknown ids are dropped
    #[serde(default)]
    pub services: Vec<i32>,
}
