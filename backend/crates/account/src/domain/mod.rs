//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{leaderboard::LeaderboardEntry, user::User};
pub use repository::{LeaderboardRepository, UserRepository};
