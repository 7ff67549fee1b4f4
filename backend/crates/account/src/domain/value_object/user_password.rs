//! User Password Value Object
//!
//! Domain value object for user passwords.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Usage
//! ```rust
//! use account::domain::value_object::user_password::{UserPassword, RawPassword};
//! use platform::password::PasswordPolicy;
//!
//! let raw = RawPassword::new("correct horse".to_string(), &PasswordPolicy::default()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicy, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, validated against `policy`
    ///
    /// ## Errors
    /// Returns a validation `AppError` with a user-facing message
    pub fn new(raw: String, policy: &PasswordPolicy) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw, policy).map_err(policy_error)?;
        Ok(Self(clear_text))
    }

    /// Password typed at login
    ///
    /// No policy rule applies: a policy tightened after registration must not
    /// lock existing users out. Only empty input is refused.
    pub fn for_verification(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::for_verification(raw).map_err(policy_error)?;
        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

fn policy_error(e: PasswordPolicyError) -> AppError {
    match e {
        PasswordPolicyError::TooShort { min, actual } => AppError::validation(format!(
            "Password must be at least {} characters (got {})",
            min, actual
        ))
        .with_action("Please choose a longer password"),

        PasswordPolicyError::TooLong { max, actual } => AppError::validation(format!(
            "Password must be at most {} characters (got {})",
            max, actual
        ))
        .with_action("Please choose a shorter password"),

        PasswordPolicyError::EmptyOrWhitespace => AppError::validation("Password cannot be empty")
            .with_action("Please enter a password"),

        PasswordPolicyError::InvalidCharacter => {
            AppError::validation("Password contains invalid characters")
                .with_action("Please remove any special control characters")
        }

        PasswordPolicyError::CommonPattern => {
            AppError::validation("Password is too common or follows a predictable pattern")
                .with_action("Please choose a more unique password")
        }
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw.inner().hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AppError::internal("Unexpected error during password hashing")
            }
        })?;

        Ok(Self(hashed))
    }

    /// Restore from the stored string
    pub fn from_db(stored: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_stored(stored)
            .map_err(|_| AppError::internal("Invalid password hash in database"))?;
        Ok(Self(hashed))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_stored_str()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }

    /// True for legacy SHA-256 digests and non-Argon2id hashes
    pub fn needs_rehash(&self) -> bool {
        self.0.needs_rehash()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_empty_password_is_validation_error() {
        let err = RawPassword::new(String::new(), &PasswordPolicy::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.action().is_some());
    }

    #[test]
    fn test_strict_policy_message() {
        let err = RawPassword::new("short".to_string(), &PasswordPolicy::strict()).unwrap_err();
        assert!(err.message().contains("at least 8"));
    }

    #[test]
    fn test_for_verification_ignores_policy_rules() {
        let long = "x".repeat(500);
        assert!(RawPassword::for_verification(long).is_ok());
        assert!(RawPassword::for_verification("   ".to_string()).is_ok());

        let err = RawPassword::for_verification(String::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_from_db_rejects_garbage() {
        let err = UserPassword::from_db("plaintext").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
