//! Leaderboard Use Case

use std::sync::Arc;

use crate::domain::entity::leaderboard::LeaderboardEntry;
use crate::domain::repository::LeaderboardRepository;
use crate::error::AccountResult;

/// Largest page the leaderboard will return
pub const MAX_LEADERBOARD_LIMIT: u32 = 100;

/// Ranking of best scores
pub struct LeaderboardUseCase<L>
where
    L: LeaderboardRepository,
{
    repo: Arc<L>,
}

impl<L> LeaderboardUseCase<L>
where
    L: LeaderboardRepository,
{
    pub fn new(repo: Arc<L>) -> Self {
        Self { repo }
    }

    /// Top `limit` entries, `limit` clamped to `1..=MAX_LEADERBOARD_LIMIT`
    pub async fn execute(&self, limit: u32) -> AccountResult<Vec<LeaderboardEntry>> {
        let limit = limit.clamp(1, MAX_LEADERBOARD_LIMIT);
        self.repo.top_scores(limit).await
    }

    pub async fn user_count(&self) -> AccountResult<u64> {
        self.repo.count_users().await
    }
}
