//! Staff roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{access::AccessLevel, validation};

/// Role entity. The name decides the [`AccessLevel`] of every user holding it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i32,
    #[schema(example = "Staff")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    pub fn access_level(&self) -> AccessLevel {
        AccessLevel::from_role_name(&self.name)
    }
}

/// Role create/update payload
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleInput {
    /// Alphabetic characters only (Russian and English)
    #[serde(default)]
    #[validate(custom(function = "validation::ru_alpha"))]
    #[schema(example = "Staff")]
    pub name: String,
}
