//! Domain Entities
//!
//! Core business entities for the typing domain.

use account::domain::value_object::user_name::UserName;
use chrono::{DateTime, Utc};
use kernel::id::SessionId;
use platform::random::RandomSource;

use crate::domain::value_objects::{Passage, TrialPhase, TrialResult, Wpm};
use crate::error::{TypingError, TypingResult};

/// Sample texts offered when no corpus is configured
pub const DEFAULT_PASSAGES: [&str; 5] = [
    "The quick brown fox jumps over the lazy dog. A journey of a thousand miles begins with a single step.",
    "Actions speak louder than words. Better late than never.",
    "In the middle of difficulty lies opportunity. Success is not final, failure is not fatal: It is the courage to continue that counts.",
    "A journey of a thousand miles begins with a single step, but every step requires persistence and determination.",
    "Machine learning models utilize optimization algorithms to minimize loss functions and improve predictive accuracy.",
];

/// Fixed, non-empty set of passages
#[derive(Debug, Clone)]
pub struct Corpus {
    passages: Vec<Passage>,
}

impl Corpus {
    pub fn new<I, S>(texts: I) -> TypingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let passages = texts
            .into_iter()
            .map(Passage::new)
            .collect::<TypingResult<Vec<_>>>()?;

        if passages.is_empty() {
            return Err(TypingError::Validation(
                "Corpus must contain at least one passage".to_string(),
            ));
        }

        Ok(Self { passages })
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    /// Always false for a constructed corpus
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    /// Uniformly random passage
    pub fn pick(&self, rng: &RandomSource) -> TypingResult<&Passage> {
        rng.index(self.passages.len())
            .and_then(|i| self.passages.get(i))
            .ok_or_else(|| TypingError::Internal("Corpus is empty".to_string()))
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self {
            passages: DEFAULT_PASSAGES
                .iter()
                .map(|text| Passage::unchecked(text.to_string()))
                .collect(),
        }
    }
}

/// One timed transcription attempt
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub passage: Passage,
    pub start_time: DateTime<Utc>,
}

/// Where a session is in the trial cycle
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TrialState {
    #[default]
    Idle,
    Running(Trial),
    Scored { trial: Trial, result: TrialResult },
}

/// Per-login play session
///
/// Created on login, dropped on logout. Never persisted.
#[derive(Debug, Clone)]
pub struct PlaySession {
    pub id: SessionId,
    pub user_name: UserName,
    pub state: TrialState,
    pub created_at: DateTime<Utc>,
    /// Bumped by the store on every save; a save carrying an older value
    /// is refused
    pub revision: u64,
}

impl PlaySession {
    pub fn new(user_name: UserName, now: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::new(),
            user_name,
            state: TrialState::Idle,
            created_at: now,
            revision: 0,
        }
    }

    pub fn phase(&self) -> TrialPhase {
        match self.state {
            TrialState::Idle => TrialPhase::Idle,
            TrialState::Running(_) => TrialPhase::Running,
            TrialState::Scored { .. } => TrialPhase::Scored,
        }
    }

    /// Enter `Running`; a scored session restarts implicitly
    pub fn begin(&mut self, trial: Trial) -> TypingResult<()> {
        if matches!(self.state, TrialState::Running(_)) {
            return Err(TypingError::TrialInProgress);
        }
        self.state = TrialState::Running(trial);
        Ok(())
    }

    pub fn running_trial(&self) -> Option<&Trial> {
        match &self.state {
            TrialState::Running(trial) => Some(trial),
            _ => None,
        }
    }

    /// Move a running trial to `Scored`
    pub fn finish(&mut self, result: TrialResult) -> TypingResult<()> {
        match std::mem::take(&mut self.state) {
            TrialState::Running(trial) => {
                self.state = TrialState::Scored { trial, result };
                Ok(())
            }
            other => {
                self.state = other;
                Err(TypingError::NoTrialRunning)
            }
        }
    }

    /// Back to `Idle` from any state
    pub fn restart(&mut self) {
        self.state = TrialState::Idle;
    }

    /// Passage currently shown to the user
    pub fn passage(&self) -> Option<&Passage> {
        match &self.state {
            TrialState::Idle => None,
            TrialState::Running(trial) | TrialState::Scored { trial, .. } => Some(&trial.passage),
        }
    }

    pub fn last_score(&self) -> Option<Wpm> {
        match &self.state {
            TrialState::Scored { result, .. } => Some(result.wpm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Wpm;

    fn session() -> PlaySession {
        PlaySession::new(UserName::new("alice").unwrap(), Utc::now())
    }

    fn trial() -> Trial {
        Trial {
            passage: Passage::new("one two three").unwrap(),
            start_time: Utc::now(),
        }
    }

    fn result() -> TrialResult {
        TrialResult {
            wpm: Wpm::from_computed(42.0),
            elapsed_seconds: 4.0,
        }
    }

    #[test]
    fn test_default_corpus() {
        let corpus = Corpus::default();
        assert_eq!(corpus.len(), 5);
        assert!(!corpus.is_empty());
        assert_eq!(corpus.passages()[1].word_count(), 9);
    }

    #[test]
    fn test_corpus_rejects_empty_input() {
        assert!(Corpus::new(Vec::<String>::new()).is_err());
        assert!(Corpus::new(["fine", "   "]).is_err());
        assert_eq!(Corpus::new(["a b", "c"]).unwrap().len(), 2);
    }

    #[test]
    fn test_pick_is_deterministic_for_seed() {
        let corpus = Corpus::default();
        let a = RandomSource::seeded(3);
        let b = RandomSource::seeded(3);
        for _ in 0..10 {
            assert_eq!(corpus.pick(&a).unwrap(), corpus.pick(&b).unwrap());
        }
    }

    #[test]
    fn test_state_machine() {
        let mut s = session();
        assert_eq!(s.phase(), TrialPhase::Idle);
        assert!(s.passage().is_none());

        s.begin(trial()).unwrap();
        assert_eq!(s.phase(), TrialPhase::Running);
        assert!(matches!(s.begin(trial()), Err(TypingError::TrialInProgress)));

        s.finish(result()).unwrap();
        assert_eq!(s.phase(), TrialPhase::Scored);
        assert_eq!(s.last_score().unwrap().value(), 42.0);
        assert!(s.passage().is_some());

        // Start again straight from Scored
        s.begin(trial()).unwrap();
        assert_eq!(s.phase(), TrialPhase::Running);
        assert!(s.last_score().is_none());

        s.restart();
        assert_eq!(s.phase(), TrialPhase::Idle);
    }

    #[test]
    fn test_finish_requires_running() {
        let mut s = session();
        assert!(matches!(s.finish(result()), Err(TypingError::NoTrialRunning)));
        assert_eq!(s.phase(), TrialPhase::Idle);
    }
}
