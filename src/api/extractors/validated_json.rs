//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// A body that does not parse is a `BadRequest`; one that parses but breaks a
/// rule is a `Validation` error naming every failing field and rule.
///
/// ```rust,ignore
/// async fn create_role(ValidatedJson(input): ValidatedJson<RoleInput>) {
///     // input.name is non-empty and alphabetic here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// One line per failure: field, rule and the rejected value when known.
///
/// Fields are sorted so the message is stable.
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match e.params.get("value") {
                Some(value) => format!(
                    "Field validation for '{}' failed on the '{}' rule (value: {})",
                    field, e.code, value
                ),
                None => format!(
                    "Field validation for '{}' failed on the '{}' rule",
                    field, e.code
                ),
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RoleInput, UpdatePassword};

    #[test]
    fn test_message_names_field_and_rule() {
        let input = RoleInput {
            name: "Admin1".to_string(),
        };
        let errors = input.validate().unwrap_err();
        let message = format_validation_errors(&errors);

        assert!(message.contains("'name'"));
        assert!(message.contains("'ru_alpha'"));
    }

    #[test]
    fn test_schema_errors_are_reported() {
        let input = UpdatePassword {
            old_password: "Password1!".to_string(),
            new_password: "Password1!".to_string(),
            confirm_password: "Password1!".to_string(),
        };
        let errors = input.validate().unwrap_err();
        assert!(format_validation_errors(&errors).contains("'nefield'"));
    }
}
