//! Staff users and their payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::{access::AccessLevel, validation, Department, Role, Service};

/// User entity
///
/// The bcrypt hash is carried for login checks but never serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    #[schema(example = "Test1")]
    pub username: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
    #[serde(skip)]
    pub password_hash: String,
    pub surname: String,
    pub name: String,
    pub patronymic: String,
    pub sex: String,
    pub birth_date: Option<NaiveDate>,
    pub profession: String,
    pub info: String,
    pub slug: String,
    pub role_id: Option<i32>,
    pub role: Option<Role>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub services: Vec<Service>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Access level granted by the loaded role; no role grants nothing.
    pub fn access_level(&self) -> AccessLevel {
        self.role
            .as_ref()
            .map(Role::access_level)
            .unwrap_or(AccessLevel::Unauthorized)
    }

    /// Role name as stored in the session principal.
    pub fn role_name(&self) -> &str {
        self.role.as_ref().map(|r| r.name.as_str()).unwrap_or_default()
    }
}

/// Columns written when a user is created.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role_id: i32,
}

/// User creation payload
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUser {
    /// Starts with a letter, then ASCII letters, digits and `_.-`
    #[validate(custom(function = "validation::username"))]
    #[schema(example = "Username")]
    pub username: String,
    /// Printable ASCII with upper and lower case letters, a digit and a symbol
    #[validate(length(min = 8, max = 72), custom(function = "validation::password"))]
    #[schema(example = "8p6R*R{3", min_length = 8, max_length = 72)]
    pub password: String,
    #[validate(range(min = 1))]
    pub role_id: i32,
}

/// User update payload
///
/// Through the profile endpoint only the personal columns are applied;
/// `active`, `profession`, `info`, `roleId`, `departments` and `services`
/// need the owner endpoint.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUser {
    #[validate(custom(function = "validation::email"))]
    #[schema(example = "mail@mail.com")]
    pub email: String,
    #[validate(custom(function = "validation::e164"))]
    #[schema(example = "+79876543210")]
    pub phone: String,
    pub active: bool,
    #[validate(custom(function = "validation::optional_ru_alpha"), length(max = 255))]
    pub surname: String,
    #[validate(custom(function = "validation::optional_ru_alpha"), length(max = 255))]
    pub name: String,
    #[validate(custom(function = "validation::optional_ru_alpha"), length(max = 255))]
    pub patronymic: String,
    #[validate(custom(function = "validation::optional_ru_alpha"))]
    pub sex: String,
    #[schema(value_type = Option<String>, format = Date, example = "1995-01-01")]
    pub birth_date: Option<NaiveDate>,
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub profession: String,
    #[validate(custom(function = "validation::ru_print_ascii"))]
    pub info: String,
    pub role_id: i32,
    /// Department ids; unknown ids are dropped
    pub departments: Vec<i32>,
    /// Service ids; unknown ids are dropped
    pub services: Vec<i32>,
}

/// Password change payload
///
/// `newPassword` must differ from `oldPassword` and equal `confirmPassword`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "password_change"))]
pub struct UpdatePassword {
    #[validate(length(min = 8, max = 72), custom(function = "validation::password"))]
    pub old_password: String,
    #[validate(length(min = 8, max = 72), custom(function = "validation::password"))]
    pub new_password: String,
    #[validate(length(min = 8, max = 72), custom(function = "validation::password"))]
    pub confirm_password: String,
}

fn password_change(input: &UpdatePassword) -> Result<(), ValidationError> {
    if input.new_password == input.old_password {
        return Err(ValidationError::new("nefield"));
    }
    if input.new_password != input.confirm_password {
        return Err(ValidationError::new("eqfield"));
    }
    Ok(())
}

/// Login payload
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    /// Username, e-mail or E.164 phone
    #[validate(custom(function = "validation::login"))]
    #[schema(example = "Test1")]
    pub login: String,
    #[validate(length(min = 8, max = 72), custom(function = "validation::password"))]
    #[schema(example = "Password1!")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(old: &str, new: &str, confirm: &str) -> UpdatePassword {
        UpdatePassword {
            old_password: old.into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_password_change_rules() {
        assert!(change("Password1!", "Password2!", "Password2!").validate().is_ok());
        assert!(change("Password1!", "Password1!", "Password1!").validate().is_err());
        assert!(change("Password1!", "Password2!", "Password3!").validate().is_err());
        assert!(change("Password1!", "password2", "password2").validate().is_err());
    }

    #[test]
    fn test_login_request() {
        let ok = LoginRequest {
            login: "test1@test.com".into(),
            password: "Password1!".into(),
        };
        assert!(ok.validate().is_ok());

        let bad = LoginRequest {
            login: "".into(),
            password: "short".into(),
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("login"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_create_user_requires_role() {
        let input = CreateUser {
            username: "Test1".into(),
            password: "Password1!".into(),
            role_id: 0,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role_id"));
    }

    #[test]
    fn test_hash_is_not_serialized() {
        let user = User {
            id: 1,
            username: "Test1".into(),
            email: String::new(),
            phone: String::new(),
            active: true,
            password_hash: "$2b$12$secret".into(),
            surname: String::new(),
            name: String::new(),
            patronymic: String::new(),
            sex: String::new(),
            birth_date: None,
            profession: String::new(),
            info: String::new(),
            slug: "1".into(),
            role_id: None,
            role: None,
            departments: vec![],
            services: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"roleId\""));
        assert_eq!(user.access_level(), AccessLevel::Unauthorized);
    }
}
