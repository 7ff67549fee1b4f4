//! Best Score Use Case

use std::sync::Arc;

use crate::application::resolve_user_name;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{score::Score, user_name::UserName};
use crate::error::AccountResult;

/// Looks up a user's best score
pub struct BestScoreUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> BestScoreUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Zero when the user is unknown or has not finished a test yet
    pub async fn execute(&self, user_name: &str) -> AccountResult<Score> {
        let Some(user_name) = resolve_user_name(self.user_repo.as_ref(), user_name).await? else {
            return Ok(Score::ZERO);
        };

        self.execute_for(&user_name).await
    }

    pub async fn execute_for(&self, user_name: &UserName) -> AccountResult<Score> {
        let score = self.user_repo.best_score(user_name).await?;
        Ok(score.unwrap_or(Score::ZERO))
    }
}
