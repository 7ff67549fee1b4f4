//! Score Value Object
//!
//! A words-per-minute figure. Always finite and never negative.

use serde::Serialize;
use std::fmt;

/// Error returned for a non-finite or negative score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidScore(pub f64);

impl fmt::Display for InvalidScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score must be a finite, non-negative number (got {})", self.0)
    }
}

impl std::error::Error for InvalidScore {}

/// Words per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub const ZERO: Score = Score(0.0);

    pub fn new(wpm: f64) -> Result<Self, InvalidScore> {
        if wpm.is_finite() && wpm >= 0.0 {
            Ok(Self(wpm))
        } else {
            Err(InvalidScore(wpm))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rounded to two decimals, for display
    pub fn rounded(&self) -> f64 {
        (self.0 * 100.0).round() / 100.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} WPM", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_scores() {
        assert_eq!(Score::new(0.0).unwrap(), Score::ZERO);
        assert_eq!(Score::new(60.0).unwrap().value(), 60.0);
    }

    #[test]
    fn test_invalid_scores() {
        assert!(Score::new(-1.0).is_err());
        assert!(Score::new(f64::INFINITY).is_err());
        assert!(Score::new(f64::NAN).is_err());
    }

    #[test]
    fn test_rounded_and_display() {
        let score = Score::new(61.23456).unwrap();
        assert_eq!(score.rounded(), 61.23);
        assert_eq!(score.to_string(), "61.23 WPM");
    }

    #[test]
    fn test_ordering() {
        assert!(Score::new(50.0).unwrap() < Score::new(60.0).unwrap());
    }
}
