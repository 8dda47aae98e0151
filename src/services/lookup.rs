//! Path parameter parsing.
//!
//! Handlers pass identifiers through as raw strings; services decide
//! whether a value is a numeric ID, a slug, or garbage.

use crate::domain::slug::is_slug;
use crate::errors::{AppError, AppResult};

/// How a path parameter addresses a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Id(i32),
    Slug(&'a str),
}

fn is_numeric(param: &str) -> bool {
    !param.is_empty() && param.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a numeric ID. Anything else is `InvalidInput`.
pub fn parse_id(param: &str) -> AppResult<i32> {
    if !is_numeric(param) {
        return Err(AppError::InvalidInput);
    }
    param.parse().map_err(|_| AppError::InvalidInput)
}

/// Parse a numeric ID, falling back to a slug for entities that have one.
///
/// Digits that do not fit an ID are tried as a slug.
pub fn parse_lookup(param: &str) -> AppResult<Lookup<'_>> {
    if let Ok(id) = parse_id(param) {
        return Ok(Lookup::Id(id));
    }
    if is_slug(param) {
        return Ok(Lookup::Slug(param));
    }
    Err(AppError::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
    }

    #[test]
    fn test_parse_id_rejects_non_digits() {
        assert!(matches!(parse_id(""), Err(AppError::InvalidInput)));
        assert!(matches!(parse_id("-1"), Err(AppError::InvalidInput)));
        assert!(matches!(parse_id("+1"), Err(AppError::InvalidInput)));
        assert!(matches!(parse_id("1a"), Err(AppError::InvalidInput)));
        assert!(matches!(parse_id(" 1"), Err(AppError::InvalidInput)));
    }

    #[test]
    fn test_parse_id_rejects_overflow() {
        assert!(matches!(parse_id("99999999999"), Err(AppError::InvalidInput)));
    }

    #[test]
    fn test_parse_lookup_prefers_id() {
        assert_eq!(parse_lookup("12").unwrap(), Lookup::Id(12));
    }

    #[test]
    fn test_parse_lookup_oversized_number_is_a_slug() {
        assert_eq!(
            parse_lookup("99999999999").unwrap(),
            Lookup::Slug("99999999999")
        );
    }

    #[test]
    fn test_parse_lookup_slug() {
        assert_eq!(parse_lookup("terapiya").unwrap(), Lookup::Slug("terapiya"));
        assert_eq!(
            parse_lookup("familiya-imya").unwrap(),
            Lookup::Slug("familiya-imya")
        );
    }

    #[test]
    fn test_parse_lookup_rejects_garbage() {
        assert!(matches!(parse_lookup("Bad Slug"), Err(AppError::InvalidInput)));
        assert!(matches!(parse_lookup("-lead"), Err(AppError::InvalidInput)));
        assert!(matches!(parse_lookup(""), Err(AppError::InvalidInput)));
    }
}
