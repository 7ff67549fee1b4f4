//! Domain Services
//!
//! Pure scoring logic. Every function takes its instants as arguments.

use chrono::{DateTime, Utc};
use platform::random::RandomSource;

use crate::domain::entities::{Corpus, Trial};
use crate::domain::value_objects::{AttemptOutcome, Passage, TrialResult, Wpm};
use crate::error::{TypingError, TypingResult};

/// Number of whitespace-separated words
///
/// Used both for validating passages and for scoring, so a passage always
/// scores with the same word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Seconds between two instants, negative if `now` precedes `start`
pub fn elapsed_seconds(start: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let delta = now - start;
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}

/// `words / elapsed * 60`
///
/// Zero, negative or non-finite elapsed time is `InvalidTiming`.
pub fn compute_wpm(words: usize, elapsed_seconds: f64) -> TypingResult<Wpm> {
    if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
        return Err(TypingError::InvalidTiming { elapsed_seconds });
    }
    let wpm = words as f64 / elapsed_seconds * 60.0;
    if !wpm.is_finite() {
        return Err(TypingError::InvalidTiming { elapsed_seconds });
    }
    Ok(Wpm::from_computed(wpm))
}

/// Whether `typed` reproduces the passage
///
/// Exact comparison, whitespace included. With `trim_submission` the typed
/// text is trimmed first; the passage never is.
pub fn is_complete(typed: &str, passage: &Passage, trim_submission: bool) -> bool {
    let typed = if trim_submission { typed.trim() } else { typed };
    typed == passage.as_str()
}

/// Pick a passage and stamp the start time
pub fn start_trial(corpus: &Corpus, rng: &RandomSource, now: DateTime<Utc>) -> TypingResult<Trial> {
    let passage = corpus.pick(rng)?.clone();
    Ok(Trial {
        passage,
        start_time: now,
    })
}

/// Score one submission against a passage
///
/// Incomplete submissions are not timed, so a bad clock only matters once
/// the text matches.
pub fn evaluate_attempt(
    typed: &str,
    passage: &Passage,
    start_time: DateTime<Utc>,
    now: DateTime<Utc>,
    trim_submission: bool,
) -> TypingResult<AttemptOutcome> {
    if !is_complete(typed, passage, trim_submission) {
        return Ok(AttemptOutcome::Incomplete);
    }

    let elapsed_seconds = elapsed_seconds(start_time, now);
    let wpm = compute_wpm(passage.word_count(), elapsed_seconds)?;

    Ok(AttemptOutcome::Completed(TrialResult {
        wpm,
        elapsed_seconds,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("The quick brown fox jumps over the lazy dog."), 9);
        assert_eq!(word_count("  spaced   out\twords\n"), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_elapsed_seconds() {
        assert_eq!(elapsed_seconds(t0(), t0() + Duration::milliseconds(1500)), 1.5);
        assert_eq!(elapsed_seconds(t0(), t0()), 0.0);
        assert_eq!(elapsed_seconds(t0(), t0() - Duration::seconds(2)), -2.0);
    }

    #[test]
    fn test_compute_wpm() {
        assert_eq!(compute_wpm(9, 9.0).unwrap().value(), 60.0);
        assert_eq!(compute_wpm(10, 30.0).unwrap().value(), 20.0);
    }

    #[test]
    fn test_compute_wpm_rejects_bad_timing() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                compute_wpm(9, bad),
                Err(TypingError::InvalidTiming { .. })
            ));
        }
        // Far too small to divide safely
        assert!(compute_wpm(9, f64::MIN_POSITIVE).is_err());
    }

    #[test]
    fn test_is_complete_exact() {
        let passage = Passage::new("Actions speak louder than words.").unwrap();
        assert!(is_complete("Actions speak louder than words.", &passage, false));
        assert!(!is_complete("Actions speak louder than words. ", &passage, false));
        assert!(!is_complete("actions speak louder than words.", &passage, false));
        assert!(is_complete(" Actions speak louder than words.\n", &passage, true));
    }

    #[test]
    fn test_evaluate_attempt() {
        let passage = Passage::new("The quick brown fox jumps over the lazy dog.").unwrap();
        let start = t0();

        let outcome = evaluate_attempt("The quick", &passage, start, start, false).unwrap();
        assert_eq!(outcome, AttemptOutcome::Incomplete);

        let outcome = evaluate_attempt(
            passage.as_str(),
            &passage,
            start,
            start + Duration::seconds(9),
            false,
        )
        .unwrap();
        match outcome {
            AttemptOutcome::Completed(result) => {
                assert_eq!(result.wpm.value(), 60.0);
                assert_eq!(result.elapsed_seconds, 9.0);
            }
            AttemptOutcome::Incomplete => panic!("expected completion"),
        }
    }

    #[test]
    fn test_evaluate_attempt_zero_elapsed() {
        let passage = Passage::new("abc").unwrap();
        let err = evaluate_attempt("abc", &passage, t0(), t0(), false).unwrap_err();
        assert!(matches!(err, TypingError::InvalidTiming { elapsed_seconds } if elapsed_seconds == 0.0));
    }

    #[test]
    fn test_start_trial_uses_given_time() {
        let trial = start_trial(&Corpus::default(), &RandomSource::seeded(1), t0()).unwrap();
        assert_eq!(trial.start_time, t0());
        assert!(Corpus::default().passages().contains(&trial.passage));
    }
}
