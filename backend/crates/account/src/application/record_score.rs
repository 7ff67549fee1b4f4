//! Record Score Use Case
//!
//! Offers a finished trial's WPM as the user's new best score.

use std::sync::Arc;

use crate::application::resolve_user_name;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{score::Score, user_name::UserName};
use crate::error::{AccountError, AccountResult};

/// Record score use case
pub struct RecordScoreUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RecordScoreUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// Returns `true` when the stored best score changed
    ///
    /// A candidate that does not beat the current best, or an unknown user,
    /// leaves the store untouched and returns `false`.
    pub async fn execute(&self, user_name: &str, candidate: f64) -> AccountResult<bool> {
        let candidate = validate(candidate)?;
        let Some(user_name) = resolve_user_name(self.user_repo.as_ref(), user_name).await? else {
            return Ok(false);
        };

        self.record(&user_name, candidate).await
    }

    /// Same as [`Self::execute`] for an already resolved user name
    pub async fn execute_for(&self, user_name: &UserName, candidate: f64) -> AccountResult<bool> {
        self.record(user_name, validate(candidate)?).await
    }

    async fn record(&self, user_name: &UserName, candidate: Score) -> AccountResult<bool> {
        let updated = self.user_repo.record_score(user_name, candidate).await?;

        if updated {
            tracing::info!(user_name = %user_name, score = candidate.value(), "New best score");
        } else {
            tracing::debug!(user_name = %user_name, score = candidate.value(), "Score not a new best");
        }

        Ok(updated)
    }
}

fn validate(candidate: f64) -> AccountResult<Score> {
    Score::new(candidate).map_err(|e| AccountError::Validation(e.to_string()))
}
