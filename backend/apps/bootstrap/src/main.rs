//! Bootstrap Entry Point
//!
//! Prepares the account database and checks the typing configuration.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::sync::Arc;

use account::application::LeaderboardUseCase;
use account::store::AccountStore;
use kernel::error::app_error::AppError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typing::TypingEngine;

use crate::config::AppConfig;

/// Entries logged from the leaderboard at startup
const STARTUP_LEADERBOARD_SIZE: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bootstrap=info,account=info,typing=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let store = AccountStore::connect(&config.database_url, config.database_max_connections)
        .await
        .map_err(AppError::from)?;

    let report = store.migrate().await.map_err(AppError::from)?;
    tracing::info!(
        created_table = report.created_table,
        added_columns = report.added_columns.len(),
        renamed_legacy_password = report.renamed_legacy_password,
        "Migrations completed"
    );

    let engine = TypingEngine::new(&config.typing).map_err(AppError::from)?;
    tracing::info!(
        passages = engine.corpus().len(),
        seeded = config.typing.rng_seed.is_some(),
        trim_submission = config.typing.trim_submission,
        strict_passwords = config.account.password_policy.reject_common_patterns,
        "Typing engine configured"
    );

    let leaderboard = LeaderboardUseCase::new(Arc::new(store));
    let users = leaderboard.user_count().await.map_err(AppError::from)?;
    tracing::info!(users, "Account store ready");

    for (rank, entry) in leaderboard
        .execute(STARTUP_LEADERBOARD_SIZE)
        .await
        .map_err(AppError::from)?
        .iter()
        .enumerate()
    {
        tracing::info!(
            rank = rank + 1,
            user_name = %entry.user_name,
            best_score = entry.best_score.rounded(),
            "Leaderboard"
        );
    }

    Ok(())
}
