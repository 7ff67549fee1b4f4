//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::InvalidInput | std::io::ErrorKind::InvalidData => {
                ErrorKind::Validation
            }
            _ => ErrorKind::StorageUnavailable,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::validation(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::storage_unavailable("Database connection pool unavailable")
                    .with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // SQLite result codes; the low byte is the primary code
                // https://www.sqlite.org/rescode.html
                let code = db_err.code().and_then(|c| c.parse::<i32>().ok());
                let app_err = match code {
                    Some(2067) | Some(1555) => AppError::conflict("Duplicate key value"),
                    Some(1299) => AppError::validation("Required field is null"),
                    Some(275) => AppError::validation("Check constraint violation"),
                    // BUSY, LOCKED, IOERR, FULL, CANTOPEN and their extended codes
                    Some(c) if matches!(c & 0xff, 5 | 6 | 10 | 13 | 14) => {
                        AppError::storage_unavailable("Database unavailable")
                    }
                    _ if db_err.is_unique_violation() => {
                        AppError::conflict("Duplicate key value")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::storage_unavailable("Database connection error").with_source(err)
            }
            sqlx::Error::Configuration(_) => {
                AppError::storage_unavailable("Invalid database configuration").with_source(err)
            }
            sqlx::Error::Protocol(_) => {
                AppError::internal("Database protocol error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}
