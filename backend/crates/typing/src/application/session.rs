//! Session Use Cases
//!
//! Login creates a play session, logout destroys it.

use std::sync::Arc;

use account::AccountConfig;
use account::application::{AuthenticateInput, AuthenticateUseCase, BestScoreUseCase};
use account::domain::repository::UserRepository;
use account::domain::value_object::{score::Score, user_name::UserName};
use kernel::id::SessionId;

use crate::application::engine::TypingEngine;
use crate::domain::entities::PlaySession;
use crate::domain::repository::SessionRepository;
use crate::error::{TypingError, TypingResult};

/// Load an open session or fail with `SessionInvalid`
pub(crate) async fn load_session<S>(repo: &S, session_id: SessionId) -> TypingResult<PlaySession>
where
    S: SessionRepository,
{
    repo.get(session_id)
        .await?
        .ok_or(TypingError::SessionInvalid)
}

/// Open session output
#[derive(Debug)]
pub struct OpenSessionOutput {
    /// Handle passed to every later call
    pub session_id: SessionId,
    pub user_name: UserName,
    pub best_score: Score,
}

/// Open session (login) use case
pub struct OpenSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    authenticate: AuthenticateUseCase<U>,
    best_score: BestScoreUseCase<U>,
    session_repo: Arc<S>,
    engine: Arc<TypingEngine>,
}

impl<U, S> OpenSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        account_config: Arc<AccountConfig>,
        engine: Arc<TypingEngine>,
    ) -> Self {
        Self {
            authenticate: AuthenticateUseCase::new(user_repo.clone(), account_config),
            best_score: BestScoreUseCase::new(user_repo),
            session_repo,
            engine,
        }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> TypingResult<OpenSessionOutput> {
        let user = self
            .authenticate
            .execute_for_user(input)
            .await?
            .ok_or(TypingError::InvalidCredentials)?;

        let session = PlaySession::new(user.user_name, self.engine.now());
        self.session_repo.create(&session).await?;

        let best_score = self.best_score.execute_for(&session.user_name).await?;

        tracing::info!(
            session_id = %session.id,
            user_name = %session.user_name,
            "Play session opened"
        );

        Ok(OpenSessionOutput {
            session_id: session.id,
            user_name: session.user_name,
            best_score,
        })
    }
}

/// Close session (logout) use case
pub struct CloseSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> CloseSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Returns whether a session was closed; unknown handles are a no-op
    pub async fn execute(&self, session_id: SessionId) -> TypingResult<bool> {
        let closed = self.session_repo.delete(session_id).await?;

        if closed {
            tracing::info!(session_id = %session_id, "Play session closed");
        } else {
            tracing::debug!(session_id = %session_id, "Close for unknown session");
        }

        Ok(closed)
    }
}
