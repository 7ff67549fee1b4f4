//! Entity Module

pub mod leaderboard;
pub mod user;
