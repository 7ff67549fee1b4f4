//! Restart Test Use Case

use std::sync::Arc;

use kernel::id::SessionId;

use crate::application::session::load_session;
use crate::domain::repository::SessionRepository;
use crate::error::TypingResult;

/// Returns a session to `Idle`, dropping any trial and score
pub struct RestartTestUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> RestartTestUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self, session_id: SessionId) -> TypingResult<()> {
        let mut session = load_session(self.session_repo.as_ref(), session_id).await?;
        session.restart();
        self.session_repo.save(&session).await?;

        tracing::debug!(session_id = %session.id, "Typing test reset");
        Ok(())
    }
}
