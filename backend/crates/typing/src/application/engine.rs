//! Typing Engine
//!
//! Owns the corpus, the random source and the clock shared by all
//! sessions.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::clock::{Clock, SystemClock};
use platform::random::RandomSource;

use crate::application::config::TypingConfig;
use crate::domain::entities::{Corpus, Trial};
use crate::domain::services;
use crate::domain::value_objects::AttemptOutcome;
use crate::error::TypingResult;

pub struct TypingEngine {
    corpus: Corpus,
    rng: RandomSource,
    clock: Arc<dyn Clock>,
    trim_submission: bool,
}

impl TypingEngine {
    /// Engine on the system clock
    pub fn new(config: &TypingConfig) -> TypingResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &TypingConfig, clock: Arc<dyn Clock>) -> TypingResult<Self> {
        let corpus = config.corpus()?;

        tracing::debug!(
            passages = corpus.len(),
            seeded = config.rng_seed.is_some(),
            trim_submission = config.trim_submission,
            "Typing engine ready"
        );

        Ok(Self {
            corpus,
            rng: RandomSource::from_seed(config.rng_seed),
            clock,
            trim_submission: config.trim_submission,
        })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// New trial starting now
    pub fn start_trial(&self) -> TypingResult<Trial> {
        services::start_trial(&self.corpus, &self.rng, self.now())
    }

    /// Check `typed` against a running trial at the current instant
    pub fn evaluate(&self, trial: &Trial, typed: &str) -> TypingResult<AttemptOutcome> {
        services::evaluate_attempt(
            typed,
            &trial.passage,
            trial.start_time,
            self.now(),
            self.trim_submission,
        )
    }
}
