//! Domain Value Objects

use serde::Serialize;
use std::fmt;

use crate::domain::services::word_count;
use crate::error::{TypingError, TypingResult};

/// Text a user must reproduce verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Passage(String);

impl Passage {
    /// A passage must contain at least one word
    pub fn new(text: impl Into<String>) -> TypingResult<Self> {
        let text = text.into();
        if word_count(&text) == 0 {
            return Err(TypingError::Validation(
                "Passage must contain at least one word".to_string(),
            ));
        }
        Ok(Self(text))
    }

    /// Built-in texts known to be valid
    pub(crate) fn unchecked(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.0)
    }
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Words per minute of one completed trial
///
/// Only produced by [`crate::domain::services::compute_wpm`], so it is
/// always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Wpm(f64);

impl Wpm {
    pub(crate) fn from_computed(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rounded to two decimals, for display
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl fmt::Display for Wpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} WPM", self.0)
    }
}

/// Score of a completed trial
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialResult {
    pub wpm: Wpm,
    pub elapsed_seconds: f64,
}

/// Result of checking one submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AttemptOutcome {
    /// Typed text does not match the passage yet
    Incomplete,
    /// Typed text matches; the trial is scored
    Completed(TrialResult),
}

/// Coarse state of a session, for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialPhase {
    Idle,
    Running,
    Scored,
}
