//! Submit Attempt Use Case

use std::sync::Arc;

use account::application::RecordScoreUseCase;
use account::domain::repository::UserRepository;
use kernel::id::SessionId;

use crate::application::engine::TypingEngine;
use crate::application::session::load_session;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{AttemptOutcome, TrialResult};
use crate::error::{TypingError, TypingResult};

/// Output DTO for submit attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitAttemptOutput {
    /// Keep typing; the session is still running
    Incomplete,
    Completed {
        result: TrialResult,
        /// The score replaced the user's stored best
        new_best: bool,
    },
}

/// Submit Attempt Use Case
pub struct SubmitAttemptUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    record_score: RecordScoreUseCase<U>,
    session_repo: Arc<S>,
    engine: Arc<TypingEngine>,
}

impl<U, S> SubmitAttemptUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, engine: Arc<TypingEngine>) -> Self {
        Self {
            record_score: RecordScoreUseCase::new(user_repo),
            session_repo,
            engine,
        }
    }

    pub async fn execute(
        &self,
        session_id: SessionId,
        typed_text: &str,
    ) -> TypingResult<SubmitAttemptOutput> {
        let mut session = load_session(self.session_repo.as_ref(), session_id).await?;
        let trial = session
            .running_trial()
            .ok_or(TypingError::NoTrialRunning)?;

        let result = match self.engine.evaluate(trial, typed_text) {
            Ok(AttemptOutcome::Incomplete) => return Ok(SubmitAttemptOutput::Incomplete),
            Ok(AttemptOutcome::Completed(result)) => result,
            Err(e) => {
                // Trial stays Running; nothing is recorded
                e.log();
                return Err(e);
            }
        };

        // The Scored state is committed first so a Restart or Start that
        // landed meanwhile wins and nothing is recorded
        session.finish(result)?;
        self.session_repo.save(&session).await?;

        let new_best = self
            .record_score
            .execute_for(&session.user_name, result.wpm.value())
            .await?;

        tracing::info!(
            session_id = %session.id,
            user_name = %session.user_name,
            wpm = result.wpm.rounded(),
            elapsed_seconds = result.elapsed_seconds,
            new_best,
            "Typing test completed"
        );

        Ok(SubmitAttemptOutput::Completed { result, new_best })
    }
}
