//! Leaderboard Entry

use serde::Serialize;

use crate::domain::value_object::{score::Score, user_name::UserName};

/// One row of the best-score ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_name: UserName,
    pub best_score: Score,
}
