//! User Entity
//!
//! Identity, credential and performance record of one typist.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    score::Score, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// User name (unique, immutable)
    pub user_name: UserName,
    /// Hashed password
    pub password_hash: UserPassword,
    /// Highest WPM ever recorded
    pub best_score: Score,
    /// Created timestamp (absent for rows written by older deployments)
    pub created_at: Option<DateTime<Utc>>,
    /// Updated timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user with a zero best score
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            user_name,
            password_hash,
            best_score: Score::ZERO,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
