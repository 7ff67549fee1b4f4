//! Application Configuration
//!
//! Configuration for the account application layer.

/// Re-export the password policy from platform
pub use platform::password::PasswordPolicy;

/// Account application configuration
#[derive(Debug, Clone, Default)]
pub struct AccountConfig {
    /// Rules applied to new passwords
    pub password_policy: PasswordPolicy,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AccountConfig {
    /// NIST-style password rules
    pub fn strict() -> Self {
        Self {
            password_policy: PasswordPolicy::strict(),
            ..Default::default()
        }
    }

    /// Add an application-wide pepper
    pub fn with_pepper(mut self, pepper: impl Into<Vec<u8>>) -> Self {
        self.password_pepper = Some(pepper.into());
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        let config = AccountConfig::default();
        assert_eq!(config.password_policy.min_length, 1);
        assert!(!config.password_policy.reject_common_patterns);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_strict_with_pepper() {
        let config = AccountConfig::strict().with_pepper(b"pepper".to_vec());
        assert_eq!(config.password_policy, PasswordPolicy::strict());
        assert_eq!(config.pepper(), Some(&b"pepper"[..]));
    }
}
