//! Role-based access levels.
//!
//! A flat total order over role names. Role rows in the database may carry
//! any name; only the four names below grant access.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Access level granted by a role name, ordered from least to most trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum AccessLevel {
    Unauthorized,
    Staff,
    #[serde(rename = "Admin")]
    Administrator,
    Owner,
    Superuser,
}

impl AccessLevel {
    /// All levels in ascending order.
    pub const ALL: [AccessLevel; 5] = [
        AccessLevel::Unauthorized,
        AccessLevel::Staff,
        AccessLevel::Administrator,
        AccessLevel::Owner,
        AccessLevel::Superuser,
    ];

    /// Role name stored in the database for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Unauthorized => "Unauthorized",
            AccessLevel::Staff => "Staff",
            AccessLevel::Administrator => "Admin",
            AccessLevel::Owner => "Owner",
            AccessLevel::Superuser => "Superuser",
        }
    }

    /// Map a role name to its level. Unknown names grant nothing.
    pub fn from_role_name(name: &str) -> Self {
        match name {
            "Superuser" => AccessLevel::Superuser,
            "Owner" => AccessLevel::Owner,
            "Admin" => AccessLevel::Administrator,
            "Staff" => AccessLevel::Staff,
            _ => AccessLevel::Unauthorized,
        }
    }

    /// True when `actual` is at least this (required) level.
    pub fn access_allowed(self, actual: AccessLevel) -> bool {
        actual >= self
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for AccessLevel {
    fn from(name: &str) -> Self {
        AccessLevel::from_role_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_allowed_matches_ordinal_for_every_pair() {
        for (ri, required) in AccessLevel::ALL.iter().enumerate() {
            for (ai, actual) in AccessLevel::ALL.iter().enumerate() {
                assert_eq!(
                    required.access_allowed(*actual),
                    ai >= ri,
                    "required={} actual={}",
                    required,
                    actual
                );
            }
        }
    }

    #[test]
    fn test_examples() {
        assert!(AccessLevel::Staff.access_allowed(AccessLevel::Owner));
        assert!(!AccessLevel::Owner.access_allowed(AccessLevel::Staff));
        assert!(!AccessLevel::Staff.access_allowed(AccessLevel::Unauthorized));
    }

    #[test]
    fn test_role_names_round_trip() {
        for level in AccessLevel::ALL.iter().skip(1) {
            assert_eq!(AccessLevel::from_role_name(level.as_str()), *level);
        }
        assert_eq!(AccessLevel::from_role_name("Administrator"), AccessLevel::Unauthorized);
        assert_eq!(AccessLevel::from_role_name("staff"), AccessLevel::Unauthorized);
        assert_eq!(AccessLevel::from_role_name(""), AccessLevel::Unauthorized);
    }
}
