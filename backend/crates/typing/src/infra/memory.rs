//! In-Memory Session Store
//!
//! Play sessions live only as long as the process.

use std::collections::HashMap;

use kernel::id::SessionId;
use tokio::sync::Mutex;

use crate::domain::entities::PlaySession;
use crate::domain::repository::SessionRepository;
use crate::error::{TypingError, TypingResult};

/// Mutex-protected map of open sessions
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<SessionId, PlaySession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open sessions
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}

impl SessionRepository for InMemorySessionStore {
    async fn create(&self, session: &PlaySession) -> TypingResult<()> {
        let mut sessions = self.sessions.lock().await;
        if sessions.contains_key(&session.id) {
            return Err(TypingError::Internal(format!(
                "Duplicate session id {}",
                session.id
            )));
        }
        sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn get(&self, session_id: SessionId) -> TypingResult<Option<PlaySession>> {
        Ok(self.sessions.lock().await.get(&session_id).cloned())
    }

    async fn save(&self, session: &PlaySession) -> TypingResult<()> {
        let mut sessions = self.sessions.lock().await;
        let stored = sessions
            .get_mut(&session.id)
            .ok_or(TypingError::SessionInvalid)?;

        if stored.revision != session.revision {
            return Err(TypingError::SessionChanged);
        }

        *stored = session.clone();
        stored.revision += 1;
        Ok(())
    }

    async fn delete(&self, session_id: SessionId) -> TypingResult<bool> {
        Ok(self.sessions.lock().await.remove(&session_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use account::domain::value_object::user_name::UserName;
    use chrono::Utc;

    fn session() -> PlaySession {
        PlaySession::new(UserName::new("alice").unwrap(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_get_delete() {
        let store = InMemorySessionStore::new();
        let s = session();

        store.create(&s).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert!(store.create(&s).await.is_err());

        let loaded = store.get(s.id).await.unwrap().unwrap();
        assert_eq!(loaded.user_name, s.user_name);

        assert!(store.delete(s.id).await.unwrap());
        assert!(!store.delete(s.id).await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_stale_save_is_refused() {
        let store = InMemorySessionStore::new();
        let s = session();
        store.create(&s).await.unwrap();

        let mut first = store.get(s.id).await.unwrap().unwrap();
        let stale = first.clone();

        first.restart();
        store.save(&first).await.unwrap();
        assert_eq!(store.get(s.id).await.unwrap().unwrap().revision, 1);

        let err = store.save(&stale).await.unwrap_err();
        assert!(matches!(err, TypingError::SessionChanged));
        assert_eq!(store.get(s.id).await.unwrap().unwrap().revision, 1);
    }

    #[tokio::test]
    async fn test_save_closed_session() {
        let store = InMemorySessionStore::new();
        let err = store.save(&session()).await.unwrap_err();
        assert!(matches!(err, TypingError::SessionInvalid));
    }
}
