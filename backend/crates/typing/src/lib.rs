//! Typing Test Engine
//!
//! Clean Architecture structure:
//! - `domain/` - Passages, trial state machine, WPM scoring
//! - `application/` - Use cases driven by the presentation layer
//! - `infra/` - In-memory session store
//!
//! ## Trial lifecycle
//! `Idle --start--> Running --exact match--> Scored --restart--> Idle`
//!
//! - The server clock is the only source of elapsed time
//! - A trial with non-positive elapsed time is never scored
//! - Completed trials are offered to the account store as a best score

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::TypingConfig;
pub use application::engine::TypingEngine;
pub use error::{TypingError, TypingResult};
pub use infra::memory::InMemorySessionStore;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::id::SessionId;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
}

pub mod scoring {
    //! Pure scoring functions, usable without a session
    pub use crate::domain::services::*;
}
