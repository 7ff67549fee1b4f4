//! Application Configuration
//!
//! Configuration for the typing application layer.

use crate::domain::entities::{Corpus, DEFAULT_PASSAGES};
use crate::error::TypingResult;

/// Fixed seed used by [`TypingConfig::development`]
pub const DEVELOPMENT_RNG_SEED: u64 = 0x5EED;

/// Typing application configuration
#[derive(Debug, Clone)]
pub struct TypingConfig {
    /// Passages a trial is drawn from
    pub passages: Vec<String>,
    /// Seed for passage selection; `None` seeds from OS entropy
    pub rng_seed: Option<u64>,
    /// Trim surrounding whitespace from submissions before comparing
    pub trim_submission: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            passages: DEFAULT_PASSAGES.iter().map(|s| s.to_string()).collect(),
            rng_seed: None,
            trim_submission: false,
        }
    }
}

impl TypingConfig {
    /// Create config for development (reproducible passage order)
    pub fn development() -> Self {
        Self {
            rng_seed: Some(DEVELOPMENT_RNG_SEED),
            ..Default::default()
        }
    }

    pub fn with_passages<I, S>(mut self, passages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.passages = passages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_trim_submission(mut self, trim: bool) -> Self {
        self.trim_submission = trim;
        self
    }

    /// Validated corpus
    pub fn corpus(&self) -> TypingResult<Corpus> {
        Corpus::new(self.passages.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TypingConfig::default();
        assert_eq!(config.passages.len(), 5);
        assert!(config.rng_seed.is_none());
        assert!(!config.trim_submission);
        assert_eq!(config.corpus().unwrap().len(), 5);
    }

    #[test]
    fn test_development_is_seeded() {
        assert_eq!(TypingConfig::development().rng_seed, Some(DEVELOPMENT_RNG_SEED));
    }

    #[test]
    fn test_empty_passages_rejected() {
        let config = TypingConfig::default().with_passages(Vec::<String>::new());
        assert!(config.corpus().is_err());
    }
}
