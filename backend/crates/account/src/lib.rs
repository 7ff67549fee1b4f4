//! Account Store
//!
//! Durable identity, credential verification and best-score bookkeeping
//! for the typing test.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - SQLite implementation
//!
//! ## Guarantees
//! - Passwords are never stored in clear text (Argon2id, salted)
//! - User name uniqueness is enforced by the database, not by a pre-check
//! - A best score only ever increases, through a single conditional update

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::AccountConfig;
pub use error::{AccountError, AccountResult};
pub use infra::sqlite::{MigrationReport, SqliteUserRepository};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod store {
    pub use crate::infra::sqlite::SqliteUserRepository as AccountStore;
}
