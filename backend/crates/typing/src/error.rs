//! Typing Error Types
//!
//! This module provides typing-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use account::AccountError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Typing-specific result type alias
pub type TypingResult<T> = Result<T, TypingError>;

/// Typing-specific error variants
#[derive(Debug, Error)]
pub enum TypingError {
    /// Elapsed time was zero or negative; the attempt is discarded
    #[error("Invalid timing: elapsed time {elapsed_seconds}s is not positive")]
    InvalidTiming { elapsed_seconds: f64 },

    /// Session handle unknown or already closed
    #[error("Session not found or invalid")]
    SessionInvalid,

    /// Another request updated the session between load and save
    #[error("Session was changed by another request")]
    SessionChanged,

    /// Wrong user name or password
    #[error("Invalid user name or password")]
    InvalidCredentials,

    /// A trial is already running for this session
    #[error("A typing test is already in progress")]
    TrialInProgress,

    /// Submission without a running trial
    #[error("No typing test in progress")]
    NoTrialRunning,

    /// Bad configuration or input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Account store failure
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TypingError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TypingError::InvalidTiming { .. } => ErrorKind::InvalidTiming,
            TypingError::SessionInvalid | TypingError::InvalidCredentials => {
                ErrorKind::Unauthorized
            }
            TypingError::SessionChanged => ErrorKind::Conflict,
            TypingError::TrialInProgress
            | TypingError::NoTrialRunning
            | TypingError::Validation(_) => ErrorKind::Validation,
            TypingError::Account(e) => e.kind(),
            TypingError::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind().is_recoverable()
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            TypingError::Account(e) => e.log(),
            TypingError::Internal(msg) => {
                tracing::error!(message = %msg, "Typing internal error");
            }
            TypingError::InvalidTiming { elapsed_seconds } => {
                tracing::warn!(elapsed_seconds, "Typing attempt discarded: invalid timing");
            }
            TypingError::InvalidCredentials => {
                tracing::warn!("Typing session refused: invalid credentials");
            }
            _ => {
                tracing::debug!(error = %self, "Typing error");
            }
        }
    }
}

impl From<TypingError> for AppError {
    fn from(err: TypingError) -> Self {
        match err {
            TypingError::Account(e) => e.into(),
            TypingError::InvalidTiming { .. } => AppError::invalid_timing(err.to_string())
                .with_action("Please start the test again"),
            TypingError::SessionInvalid => {
                AppError::unauthorized(err.to_string()).with_action("Please log in again")
            }
            TypingError::InvalidCredentials => AppError::unauthorized(err.to_string())
                .with_action("Please check your user name and password"),
            TypingError::Internal(msg) => AppError::internal(msg),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}
