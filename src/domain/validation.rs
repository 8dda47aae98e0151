//! Field validators plugged into `#[derive(Validate)]` through `custom(function = ...)`.
//!
//! Every validator returns a `ValidationError` whose code names the rule, so the
//! rendered message reads as `field: rule`.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidateEmail, ValidationError};

static RU_ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[а-яА-ЯёЁa-zA-Z]+$").expect("valid ru_alpha regex"));

static RU_ALPHA_NUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[а-яА-ЯёЁa-zA-Z0-9]+$").expect("valid ru_alpha_num regex"));

static RU_PRINT_ASCII: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[а-яА-ЯёЁ\x20-\x7E]*$").expect("valid ru_print_ascii regex"));

static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_.-]*$").expect("valid username regex"));

static PRINTABLE_ASCII: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\x20-\x7E]+$").expect("valid password regex"));

static E164: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]?[0-9]{7,14}$").expect("valid e164 regex"));

fn check(ok: bool, code: &'static str) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(code))
    }
}

/// Cyrillic or Latin letters only.
pub fn ru_alpha(value: &str) -> Result<(), ValidationError> {
    check(RU_ALPHA.is_match(value), "ru_alpha")
}

/// Same as [`ru_alpha`] but an empty value passes.
pub fn optional_ru_alpha(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    ru_alpha(value)
}

pub fn ru_alpha_num(value: &str) -> Result<(), ValidationError> {
    check(RU_ALPHA_NUM.is_match(value), "ru_alpha_num")
}

/// Cyrillic letters plus printable ASCII. Empty passes.
pub fn ru_print_ascii(value: &str) -> Result<(), ValidationError> {
    check(RU_PRINT_ASCII.is_match(value), "ru_print_ascii")
}

/// Non-empty [`ru_print_ascii`].
pub fn required_ru_print_ascii(value: &str) -> Result<(), ValidationError> {
    check(!value.is_empty(), "required")?;
    ru_print_ascii(value)
}

pub fn username(value: &str) -> Result<(), ValidationError> {
    check(USERNAME.is_match(value), "username")
}

/// Printable ASCII with at least one lowercase letter, uppercase letter, digit and symbol.
pub fn password(value: &str) -> Result<(), ValidationError> {
    let ok = PRINTABLE_ASCII.is_match(value)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| c.is_ascii_punctuation() || c == ' ');
    check(ok, "password")
}

pub fn e164(value: &str) -> Result<(), ValidationError> {
    check(E164.is_match(value), "e164")
}

pub fn optional_e164(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    e164(value)
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    check(value.validate_email(), "email")
}

pub fn optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    email(value)
}

/// A login is a username, an e-mail address or an E.164 phone number.
pub fn login(value: &str) -> Result<(), ValidationError> {
    let ok = USERNAME.is_match(value) || value.validate_email() || E164.is_match(value);
    check(ok, "login")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ru_alpha() {
        assert!(ru_alpha("Иван").is_ok());
        assert!(ru_alpha("Ёжик").is_ok());
        assert!(ru_alpha("John").is_ok());
        assert!(ru_alpha("").is_err());
        assert!(ru_alpha("Иван1").is_err());
        assert!(ru_alpha("Анна Мария").is_err());
        assert!(optional_ru_alpha("").is_ok());
        assert!(optional_ru_alpha("Анна-Мария").is_err());
    }

    #[test]
    fn test_ru_alpha_num() {
        assert!(ru_alpha_num("Кабинет2").is_ok());
        assert!(ru_alpha_num("room 2").is_err());
    }

    #[test]
    fn test_ru_print_ascii() {
        assert!(ru_print_ascii("").is_ok());
        assert!(ru_print_ascii("Серый полосатый, 3 года!").is_ok());
        assert!(ru_print_ascii("tab\there").is_err());
        assert!(ru_print_ascii("日本").is_err());
        assert!(required_ru_print_ascii("").is_err());
    }

    #[test]
    fn test_username() {
        assert!(username("Test1").is_ok());
        assert!(username("j.doe-2_x").is_ok());
        assert!(username("1user").is_err());
        assert!(username("").is_err());
        assert!(username("user@host").is_err());
    }

    #[test]
    fn test_password_requires_every_class() {
        assert!(password("Password1!").is_ok());
        assert!(password("Pass word1").is_ok());
        assert!(password("password1!").is_err());
        assert!(password("PASSWORD1!").is_err());
        assert!(password("Password!!").is_err());
        assert!(password("Password11").is_err());
        assert!(password("Пароль1!Aa").is_err());
    }

    #[test]
    fn test_e164() {
        assert!(e164("+71111111111").is_ok());
        assert!(e164("+12345678").is_ok());
        assert!(e164("71111111111").is_err());
        assert!(e164("+7 111 111").is_err());
        assert!(optional_e164("").is_ok());
    }

    #[test]
    fn test_email() {
        assert!(email("mail@mail.su").is_ok());
        assert!(email("not-an-email").is_err());
        assert!(optional_email("").is_ok());
    }

    #[test]
    fn test_login_accepts_three_shapes() {
        assert!(login("Test1").is_ok());
        assert!(login("test1@test.com").is_ok());
        assert!(login("+71111111111").is_ok());
        assert!(login("").is_err());
        assert!(login("имя").is_err());
    }

    #[test]
    fn test_error_code_names_rule() {
        let err = e164("123").unwrap_err();
        assert_eq!(err.code, "e164");
    }
}
