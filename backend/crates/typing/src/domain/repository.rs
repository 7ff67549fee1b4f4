//! Repository Traits
//!
//! Interfaces for session storage. Implementation is in infrastructure layer.

use kernel::id::SessionId;

use crate::domain::entities::PlaySession;
use crate::error::TypingResult;

/// PlaySession repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Store a new session
    async fn create(&self, session: &PlaySession) -> TypingResult<()>;

    /// Get session by handle
    async fn get(&self, session_id: SessionId) -> TypingResult<Option<PlaySession>>;

    /// Replace a stored session and bump its revision
    ///
    /// `SessionInvalid` if it was closed meanwhile, `SessionChanged` if
    /// another save landed since `session` was loaded.
    async fn save(&self, session: &PlaySession) -> TypingResult<()>;

    /// Delete a session, returning whether it existed
    async fn delete(&self, session_id: SessionId) -> TypingResult<bool>;
}
