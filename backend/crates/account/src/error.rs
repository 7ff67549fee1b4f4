//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Empty or malformed credentials, mismatched confirmation, bad score
    #[error("Validation failed: {0}")]
    Validation(String),

    /// User name already exists
    #[error("User name already exists")]
    UserNameTaken,

    /// Database error (store unreachable, I/O failure, ...)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Validation(_) => ErrorKind::Validation,
            AccountError::UserNameTaken => ErrorKind::Conflict,
            AccountError::Database(_) => ErrorKind::StorageUnavailable,
            AccountError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether the user can simply be re-prompted
    pub fn is_recoverable(&self) -> bool {
        self.kind().is_recoverable()
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::UserNameTaken => {
                tracing::info!("Sign up rejected: user name taken");
            }
            AccountError::Validation(_) => {
                tracing::debug!(error = %self, "Account validation error");
            }
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::Validation(msg) => {
                AppError::validation(msg).with_action("Please correct the input and try again")
            }
            AccountError::UserNameTaken => AppError::conflict("User name already exists")
                .with_action("Please choose another user name"),
            AccountError::Database(e) => {
                let kind_hint = AppError::from(e);
                AppError::storage_unavailable("Account store unavailable").with_source(kind_hint)
            }
            AccountError::Internal(msg) => AppError::internal(msg),
        }
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Validation => AccountError::Validation(err.message().to_string()),
            ErrorKind::Conflict => AccountError::UserNameTaken,
            _ => AccountError::Internal(err.to_string()),
        }
    }
}
