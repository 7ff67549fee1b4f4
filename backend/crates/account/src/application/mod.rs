//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod best_score;
pub mod config;
pub mod leaderboard;
pub mod record_score;
pub mod sign_up;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateUseCase};
pub use best_score::BestScoreUseCase;
pub use config::AccountConfig;
pub use leaderboard::LeaderboardUseCase;
pub use record_score::RecordScoreUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::AccountResult;

/// Resolve typed input to the name of an existing account
///
/// `None` when no lookup key matches a stored user.
pub(crate) async fn resolve_user_name<U>(user_repo: &U, raw: &str) -> AccountResult<Option<UserName>>
where
    U: UserRepository,
{
    for key in UserName::lookup_keys(raw) {
        if user_repo.best_score(&key).await?.is_some() {
            return Ok(Some(key));
        }
    }
    Ok(None)
}
