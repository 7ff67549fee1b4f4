//! User Name Value Object
//!
//! The user name is both the login handle and the primary key of the
//! account. It is immutable after registration.
//!
//! ## Rules
//! - NFKC normalization first, then validation
//! - Not empty, no leading or trailing whitespace
//! - No control characters
//! - At most [`USER_NAME_MAX_LENGTH`] characters (code points)
//! - Case-sensitive: `Alice` and `alice` are different accounts

use serde::Serialize;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after normalization
    Empty,

    /// User name is too long
    TooLong { length: usize, max: usize },

    /// User name starts or ends with whitespace
    SurroundingWhitespace,

    /// User name contains a control character
    ControlCharacter { position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User name cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "User name is too long ({length} chars, maximum {max})")
            }
            Self::SurroundingWhitespace => {
                write!(f, "User name cannot start or end with whitespace")
            }
            Self::ControlCharacter { position } => {
                write!(f, "User name contains a control character at position {position}")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Normalize and validate a user name from input
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();

        if normalized.is_empty() || normalized.trim().is_empty() {
            return Err(UserNameError::Empty);
        }

        if normalized.trim() != normalized {
            return Err(UserNameError::SurroundingWhitespace);
        }

        let length = normalized.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some(position) = normalized.chars().position(|c| c.is_control()) {
            return Err(UserNameError::ControlCharacter { position });
        }

        Ok(Self(normalized))
    }

    /// Restore from a stored value
    ///
    /// Rows written by older deployments were never validated, so only
    /// emptiness is rejected here.
    pub fn from_db(stored: impl Into<String>) -> Result<Self, UserNameError> {
        let stored = stored.into();
        if stored.is_empty() {
            return Err(UserNameError::Empty);
        }
        Ok(Self(stored))
    }

    /// Keys for looking up an existing account, in the order to try them
    ///
    /// The input as typed comes first, since names stored before validation
    /// existed were kept verbatim. The normalized name follows when it
    /// differs. Empty input yields no key.
    pub fn lookup_keys(raw: &str) -> Vec<Self> {
        let mut keys = Vec::with_capacity(2);
        if let Ok(as_typed) = Self::from_db(raw) {
            keys.push(as_typed);
        }
        if let Ok(normalized) = Self::new(raw) {
            if !keys.contains(&normalized) {
                keys.push(normalized);
            }
        }
        keys
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(UserName::new("alice").unwrap().as_str(), "alice");
        assert_eq!(UserName::new("Bob Smith").unwrap().as_str(), "Bob Smith");
        assert_eq!(UserName::new("タイピスト").unwrap().as_str(), "タイピスト");
    }

    #[test]
    fn test_case_is_preserved() {
        assert_ne!(UserName::new("Alice").unwrap(), UserName::new("alice").unwrap());
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width letters normalize to ASCII
        assert_eq!(UserName::new("ａｌｉｃｅ").unwrap().as_str(), "alice");
    }

    #[test]
    fn test_empty() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(
            UserName::new(" alice"),
            Err(UserNameError::SurroundingWhitespace)
        );
        assert_eq!(
            UserName::new("alice\t"),
            Err(UserNameError::SurroundingWhitespace)
        );
    }

    #[test]
    fn test_too_long() {
        let name = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            UserName::new(name),
            Err(UserNameError::TooLong { .. })
        ));
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_control_character() {
        assert_eq!(
            UserName::new("ali\u{0000}ce"),
            Err(UserNameError::ControlCharacter { position: 3 })
        );
    }

    #[test]
    fn test_from_db_keeps_legacy_value() {
        let name = UserName::from_db(" legacy ").unwrap();
        assert_eq!(name.as_str(), " legacy ");
        assert!(UserName::from_db("").is_err());
    }

    #[test]
    fn test_lookup_keys() {
        let keys: Vec<String> = UserName::lookup_keys("ａｌｉｃｅ")
            .into_iter()
            .map(|k| k.as_str().to_string())
            .collect();
        assert_eq!(keys, ["ａｌｉｃｅ", "alice"]);

        let keys = UserName::lookup_keys("alice");
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].as_str(), "alice");

        let keys = UserName::lookup_keys(" legacy ");
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].as_str(), " legacy ");

        assert!(UserName::lookup_keys("").is_empty());
    }
}
