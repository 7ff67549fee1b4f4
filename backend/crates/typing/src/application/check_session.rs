//! Check Session Use Case
//!
//! Everything the presentation layer needs to redraw a session.

use std::sync::Arc;

use account::application::BestScoreUseCase;
use account::domain::repository::UserRepository;
use account::domain::value_object::{score::Score, user_name::UserName};
use chrono::{DateTime, Utc};
use kernel::id::SessionId;
use serde::Serialize;

use crate::application::session::load_session;
use crate::domain::entities::TrialState;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{Passage, TrialPhase, TrialResult};
use crate::error::TypingResult;

/// Read-only view of one session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub user_name: UserName,
    pub phase: TrialPhase,
    pub passage: Option<Passage>,
    pub start_time: Option<DateTime<Utc>>,
    /// Result of the trial just completed
    pub last_result: Option<TrialResult>,
    pub best_score: Score,
}

/// Check session use case
pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    best_score: BestScoreUseCase<U>,
    session_repo: Arc<S>,
}

impl<U, S> CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>) -> Self {
        Self {
            best_score: BestScoreUseCase::new(user_repo),
            session_repo,
        }
    }

    pub async fn execute(&self, session_id: SessionId) -> TypingResult<SessionSnapshot> {
        let session = load_session(self.session_repo.as_ref(), session_id).await?;
        let best_score = self.best_score.execute_for(&session.user_name).await?;

        let (start_time, last_result) = match &session.state {
            TrialState::Idle => (None, None),
            TrialState::Running(trial) => (Some(trial.start_time), None),
            TrialState::Scored { trial, result } => (Some(trial.start_time), Some(*result)),
        };

        Ok(SessionSnapshot {
            session_id: session.id,
            phase: session.phase(),
            passage: session.passage().cloned(),
            start_time,
            last_result,
            best_score,
            user_name: session.user_name,
        })
    }
}
