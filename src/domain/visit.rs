//! Scheduled visits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{validation, Client, Pet, Service, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: i32,
    pub date_time: DateTime<Utc>,
    pub info: String,
    pub client_id: Option<i32>,
    pub client: Option<Client>,
    pub pet_id: Option<i32>,
    pub pet: Option<Pet>,
    pub doctor_id: Option<i32>,
    pub doctor: Option<User>,
    pub service_id: Option<i32>,
    pub service: Option<Service>,
    pub last_updated_by_id: Option<i32>,
    pub last_updated_by: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitInput {
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub date_time: DateTime<Utc>,
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub info: String,
    pub client_id: i32,
    pub pet_id: i32,
    pub doctor_id: i32,
    pub service_id: i32,
    /// Set from the session, never from the body
    #[serde(skip)]
    pub last_updated_by_id: i32,
}
