//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{leaderboard::LeaderboardEntry, user::User};
use crate::domain::value_object::{
    score::Score, user_name::UserName, user_password::UserPassword,
};
use crate::error::AccountResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// Fails with `AccountError::UserNameTaken` when the store already holds
    /// the name. Uniqueness is checked by the store itself.
    async fn create(&self, user: &User) -> AccountResult<()>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AccountResult<Option<User>>;

    /// Current best score, `None` for an unknown user
    async fn best_score(&self, user_name: &UserName) -> AccountResult<Option<Score>>;

    /// Store `candidate` only if it is strictly greater than the current best
    ///
    /// Compare and write happen in one statement. Returns whether a row
    /// was updated.
    async fn record_score(&self, user_name: &UserName, candidate: Score) -> AccountResult<bool>;

    /// Replace the stored password hash (used for transparent rehashing)
    async fn update_password_hash(
        &self,
        user_name: &UserName,
        password_hash: &UserPassword,
    ) -> AccountResult<()>;
}

/// Read-only ranking queries
#[trait_variant::make(LeaderboardRepository: Send)]
pub trait LocalLeaderboardRepository {
    /// Highest best scores first, ties broken by user name
    async fn top_scores(&self, limit: u32) -> AccountResult<Vec<LeaderboardEntry>>;

    /// Number of registered users
    async fn count_users(&self) -> AccountResult<u64>;
}
