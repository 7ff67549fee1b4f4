//! Password Hashing and Verification
//!
//! Password handling with:
//! - Argon2id hashing (memory-hard, random salt per password)
//! - Zeroization of sensitive data
//! - Configurable policy (lenient by default, NIST SP 800-63B style when strict)
//! - Verification of legacy unsalted SHA-256 hex digests, flagged for rehash
//!
//! ## Stored formats
//! - `$argon2id$v=19$...` PHC string (everything written by this crate)
//! - 64 lowercase hex characters: SHA-256 of the password bytes as typed
//!   (no normalization), as written by older deployments of the typing test.
//!   Accepted on read only.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, sha256_hex};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length under the strict policy
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (both policies)
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Length of a legacy SHA-256 hex digest
const LEGACY_SHA256_HEX_LEN: usize = 64;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Policy
// ============================================================================

/// Rules applied to a clear text password before it is hashed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum number of Unicode code points
    pub min_length: usize,
    /// Maximum number of Unicode code points
    pub max_length: usize,
    /// Reject sequential digits, keyboard walks and well-known passwords
    pub reject_common_patterns: bool,
}

impl Default for PasswordPolicy {
    /// Any non-blank password is accepted.
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: MAX_PASSWORD_LENGTH,
            reject_common_patterns: false,
        }
    }
}

impl PasswordPolicy {
    /// NIST SP 800-63B style rules
    pub fn strict() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
            reject_common_patterns: true,
        }
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// The input as typed is kept next to the NFKC form because legacy digests
/// were computed over the original bytes.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword {
    normalized: String,
    as_typed: String,
}

impl ClearTextPassword {
    /// Create a new clear text password, validated against `policy`
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(raw: String, policy: &PasswordPolicy) -> Result<Self, PasswordPolicyError> {
        let password = Self::normalize(raw);
        let normalized = &password.normalized;

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Count Unicode code points, not bytes
        let char_count = normalized.chars().count();

        if char_count < policy.min_length {
            return Err(PasswordPolicyError::TooShort {
                min: policy.min_length,
                actual: char_count,
            });
        }

        if char_count > policy.max_length {
            return Err(PasswordPolicyError::TooLong {
                max: policy.max_length,
                actual: char_count,
            });
        }

        // Control characters other than space, tab and newline
        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if policy.reject_common_patterns && is_common_pattern(normalized) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(password)
    }

    /// Password typed at sign in
    ///
    /// Only the empty string is rejected. Whitespace-only and over-long
    /// input is left for hash verification to refuse.
    pub fn for_verification(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }
        Ok(Self::normalize(raw))
    }

    fn normalize(as_typed: String) -> Self {
        let normalized = as_typed.nfkc().collect();
        Self {
            normalized,
            as_typed,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.normalized.as_bytes()
    }

    fn as_typed_bytes(&self) -> &[u8] {
        self.as_typed.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret appended before hashing
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = peppered(self.as_bytes(), pepper);

        // Random salt (128 bits)
        let salt = SaltString::generate(OsRng);

        // Argon2id, m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Stored password hash
///
/// Either an Argon2id PHC string or a legacy SHA-256 hex digest.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from the stored string (e.g., from database)
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        if !is_legacy_sha256(&hash) {
            PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        }

        Ok(Self { hash })
    }

    /// Get the string for storage
    pub fn as_stored_str(&self) -> &str {
        &self.hash
    }

    /// Whether this is an unsalted SHA-256 digest from an older deployment
    pub fn is_legacy(&self) -> bool {
        is_legacy_sha256(&self.hash)
    }

    /// Verify a password against this hash
    ///
    /// Legacy digests were written without a pepper or normalization, so
    /// they are checked against the input as typed and `pepper` is ignored.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        if self.is_legacy() {
            let candidate = sha256_hex(password.as_typed_bytes());
            return constant_time_eq(candidate.as_bytes(), self.hash.as_bytes());
        }

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let password_bytes = peppered(password.as_bytes(), pepper);

        // Argon2 uses constant-time comparison internally
        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }

    /// Check if the hash should be replaced by a fresh Argon2id hash
    pub fn needs_rehash(&self) -> bool {
        if self.is_legacy() {
            return true;
        }

        match PasswordHash::new(&self.hash) {
            Ok(parsed) => parsed.algorithm != argon2::Algorithm::Argon2id.ident(),
            Err(_) => true,
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .field("legacy", &self.is_legacy())
            .finish()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn peppered(password: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    let mut combined = password.to_vec();
    if let Some(p) = pepper {
        combined.extend_from_slice(p);
    }
    combined
}

fn is_legacy_sha256(s: &str) -> bool {
    s.len() == LEGACY_SHA256_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Check for common weak patterns
fn is_common_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();

    // All same character (e.g., "aaaaaaaa")
    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        if lower.chars().count() >= 3 && chars.all(|c| c == first) {
            return true;
        }
    }

    if is_sequential_numbers(&lower) {
        return true;
    }

    const KEYBOARD_PATTERNS: &[&str] = &[
        "qwerty",
        "qwertyuiop",
        "asdfgh",
        "asdfghjkl",
        "zxcvbn",
        "qazwsx",
        "1qaz2wsx",
    ];

    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    const COMMON_PASSWORDS: &[&str] = &[
        "password",
        "password1",
        "password123",
        "abcdefgh",
        "letmein",
        "welcome",
        "admin123",
        "iloveyou",
        "sunshine",
        "princess",
        "football",
        "baseball",
        "trustno1",
    ];

    COMMON_PASSWORDS.contains(&lower.as_str())
}

/// Check if string is sequential numbers
fn is_sequential_numbers(s: &str) -> bool {
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() < 4 {
        return false;
    }

    let is_ascending = digits
        .windows(2)
        .all(|w| w[1] == w[0] + 1 || (w[0] == 9 && w[1] == 0));

    let is_descending = digits
        .windows(2)
        .all(|w| w[0] == w[1] + 1 || (w[0] == 0 && w[1] == 9));

    is_ascending || is_descending
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(raw: &str) -> ClearTextPassword {
        ClearTextPassword::new(raw.to_string(), &PasswordPolicy::default()).unwrap()
    }

    #[test]
    fn test_lenient_accepts_short_password() {
        let result = ClearTextPassword::new("a".to_string(), &PasswordPolicy::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_password_empty() {
        let result = ClearTextPassword::new("".to_string(), &PasswordPolicy::default());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::EmptyOrWhitespace);
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("    ".to_string(), &PasswordPolicy::default());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::EmptyOrWhitespace);
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password, &PasswordPolicy::default());
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}def".to_string(), &PasswordPolicy::default());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::InvalidCharacter);
    }

    #[test]
    fn test_strict_policy() {
        let strict = PasswordPolicy::strict();

        let result = ClearTextPassword::new("short".to_string(), &strict);
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { .. })));

        let result = ClearTextPassword::new("password123".to_string(), &strict);
        assert_eq!(result.unwrap_err(), PasswordPolicyError::CommonPattern);

        let result = ClearTextPassword::new("12345678".to_string(), &strict);
        assert_eq!(result.unwrap_err(), PasswordPolicyError::CommonPattern);

        let result = ClearTextPassword::new("MySecure#Pass2024!".to_string(), &strict);
        assert!(result.is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let password = lenient("TestPassword123!");
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));
        assert!(!hashed.verify(&lenient("WrongPassword123!"), None));
        assert!(!hashed.needs_rehash());
    }

    #[test]
    fn test_hash_is_salted() {
        let password = lenient("same password");
        let first = password.hash(None).unwrap();
        let second = password.hash(None).unwrap();
        assert_ne!(first.as_stored_str(), second.as_stored_str());
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = lenient("TestPassword123!");
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_stored_roundtrip() {
        let password = lenient("TestPassword123!");
        let hashed = password.hash(None).unwrap();

        let restored = HashedPassword::from_stored(hashed.as_stored_str()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_legacy_sha256_digest() {
        // sha256("hello")
        let stored = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
        let hashed = HashedPassword::from_stored(stored).unwrap();

        assert!(hashed.is_legacy());
        assert!(hashed.needs_rehash());
        assert!(hashed.verify(&lenient("hello"), None));
        assert!(hashed.verify(&lenient("hello"), Some(b"pepper is ignored")));
        assert!(!hashed.verify(&lenient("hello!"), None));
    }

    #[test]
    fn test_legacy_digest_uses_input_as_typed() {
        // "\u{FB01}sh" normalizes to "fish"; the stored digest is over the ligature
        let typed = "\u{FB01}sh";
        let hashed = HashedPassword::from_stored(sha256_hex(typed.as_bytes())).unwrap();

        let password = ClearTextPassword::for_verification(typed.to_string()).unwrap();
        assert!(hashed.verify(&password, None));

        let folded = ClearTextPassword::for_verification("fish".to_string()).unwrap();
        assert!(!hashed.verify(&folded, None));
    }

    #[test]
    fn test_argon2_hash_uses_normalized_input() {
        let hashed = lenient("\u{FB01}sh").hash(None).unwrap();
        assert!(hashed.verify(&lenient("fish"), None));
    }

    #[test]
    fn test_for_verification_accepts_whitespace_only() {
        let spaces = "   ";
        let hashed = HashedPassword::from_stored(sha256_hex(spaces.as_bytes())).unwrap();

        let password = ClearTextPassword::for_verification(spaces.to_string()).unwrap();
        assert!(hashed.verify(&password, None));
        assert_eq!(
            ClearTextPassword::for_verification(String::new()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
    }

    #[test]
    fn test_invalid_stored_string() {
        assert!(HashedPassword::from_stored("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = lenient("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
