//! Startup Configuration
//!
//! Read once from the environment (and `.env`, loaded by `main`).

use std::env;
use std::path::PathBuf;

use account::AccountConfig;
use anyhow::{Context, bail};
use typing::TypingConfig;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Settings for the whole process
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub account: AccountConfig,
    pub typing: TypingConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if database_max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
        }

        let mut account = AccountConfig::default();
        if let Some(pepper_b64) = var("PASSWORD_PEPPER") {
            let pepper = platform::crypto::from_base64(pepper_b64.trim())
                .context("PASSWORD_PEPPER must be base64")?;
            account = account.with_pepper(pepper);
        }
        if parse_flag(var("PASSWORD_POLICY_STRICT"), "PASSWORD_POLICY_STRICT")? {
            account.password_policy = account::application::config::PasswordPolicy::strict();
        }

        let mut typing = TypingConfig::default();
        if let Some(seed) = var("TYPING_RNG_SEED") {
            let seed = seed
                .trim()
                .parse::<u64>()
                .context("TYPING_RNG_SEED must be an unsigned integer")?;
            typing = typing.with_seed(seed);
        }
        if let Some(path) = var("TYPING_PASSAGES_FILE") {
            typing = typing.with_passages(load_passages(PathBuf::from(path))?);
        }
        typing = typing.with_trim_submission(parse_flag(
            var("TYPING_TRIM_SUBMISSION"),
            "TYPING_TRIM_SUBMISSION",
        )?);

        // Surface an unusable corpus at startup rather than on first use
        typing.corpus().context("Invalid typing corpus")?;

        Ok(Self {
            database_url,
            database_max_connections,
            account,
            typing,
        })
    }
}

/// JSON array of passage strings
fn load_passages(path: PathBuf) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read passages file {}", path.display()))?;
    let passages: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("{} must be a JSON array of strings", path.display()))?;
    Ok(passages)
}

fn parse_flag(value: Option<String>, key: &str) -> anyhow::Result<bool> {
    match value.as_deref().map(str::trim) {
        None => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => bail!("{key} must be true/false (got {v:?})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.database_max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(config.account.pepper().is_none());
        assert!(config.typing.rng_seed.is_none());
        assert!(!config.typing.trim_submission);
        assert_eq!(config.typing.passages.len(), 5);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("PASSWORD_PEPPER", "cGVwcGVy"),
            ("PASSWORD_POLICY_STRICT", "true"),
            ("TYPING_RNG_SEED", "42"),
            ("TYPING_TRIM_SUBMISSION", "1"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.database_max_connections, 2);
        assert_eq!(config.account.pepper(), Some(&b"pepper"[..]));
        assert_eq!(config.account.password_policy.min_length, 8);
        assert_eq!(config.typing.rng_seed, Some(42));
        assert!(config.typing.trim_submission);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = load(&[("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "zero")]).is_err());
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(load(&[("PASSWORD_PEPPER", "not base64!")]).is_err());
        assert!(load(&[("TYPING_RNG_SEED", "-1")]).is_err());
        assert!(load(&[("TYPING_TRIM_SUBMISSION", "maybe")]).is_err());
        assert!(load(&[("TYPING_PASSAGES_FILE", "/nonexistent/passages.json")]).is_err());
    }

    #[test]
    fn test_passages_file() {
        let dir = std::env::temp_dir();
        let good = dir.join(format!("passages-{}.json", std::process::id()));
        std::fs::write(&good, r#"["one two three", "four five"]"#).unwrap();
        let config = load(&[("TYPING_PASSAGES_FILE", good.to_str().unwrap())]).unwrap();
        assert_eq!(config.typing.passages, vec!["one two three", "four five"]);

        std::fs::write(&good, "[]").unwrap();
        assert!(load(&[("TYPING_PASSAGES_FILE", good.to_str().unwrap())]).is_err());

        std::fs::write(&good, r#"{"not": "an array"}"#).unwrap();
        assert!(load(&[("TYPING_PASSAGES_FILE", good.to_str().unwrap())]).is_err());

        std::fs::remove_file(&good).unwrap();
    }
}
