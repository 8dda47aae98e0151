//! Password value object - Domain layer password handling.
//!
//! Wraps a bcrypt hash. The plain text never leaves this module.

use crate::config::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PASSWORD_HASH_COST};
use crate::errors::{AppError, AppResult};

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plain text password with the configured bcrypt cost.
    ///
    /// # Errors
    /// Returns a validation error if the length is outside 8..=72.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        Self::with_cost(plain_text, PASSWORD_HASH_COST)
    }

    /// Hash with an explicit bcrypt cost.
    pub fn with_cost(plain_text: &str, cost: u32) -> AppResult<Self> {
        let len = plain_text.len() as u64;
        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&len) {
            return Err(AppError::validation(format!(
                "Password must be between {} and {} characters",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
            )));
        }

        let hash = bcrypt::hash(plain_text, cost)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        bcrypt::verify(plain_text, &self.hash).unwrap_or(false)
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::with_cost("Password2!", TEST_COST).unwrap();

        assert!(password.verify("Password2!"));
        assert!(!password.verify("wrong"));
    }

    #[test]
    fn test_hash_is_bcrypt() {
        let password = Password::with_cost("Password2!", TEST_COST).unwrap();
        assert!(password.as_str().starts_with("$2"));
        assert_ne!(password.as_str(), "Password2!");
    }

    #[test]
    fn test_default_cost_is_twelve() {
        let password = Password::new("Password2!").unwrap();
        assert!(password.as_str().starts_with("$2b$12$"));
    }

    #[test]
    fn test_password_from_hash() {
        let hash = Password::with_cost("Password1!", TEST_COST).unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify("Password1!"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let pass1 = Password::with_cost("Password1!", TEST_COST).unwrap();
        let pass2 = Password::with_cost("Password1!", TEST_COST).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify("Password1!"));
        assert!(pass2.verify("Password1!"));
    }

    #[test]
    fn test_length_bounds() {
        assert!(Password::with_cost("short", TEST_COST).is_err());
        assert!(Password::with_cost(&"a".repeat(73), TEST_COST).is_err());
        assert!(Password::with_cost("12345678", TEST_COST).is_ok());
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        let stored = Password::from_hash("not-a-hash".to_string());
        assert!(!stored.verify("anything"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::with_cost("Password1!", TEST_COST).unwrap();
        assert!(format!("{:?}", password).contains("REDACTED"));
    }
}
