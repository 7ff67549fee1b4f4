//! Authenticate Use Case
//!
//! Checks a user name / password pair against the store.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AccountError, AccountResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub user_name: String,
    pub password: String,
}

impl AuthenticateInput {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
        }
    }
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }

    /// True only when the user exists and the password verifies
    pub async fn execute(&self, input: AuthenticateInput) -> AccountResult<bool> {
        Ok(self.execute_for_user(input).await?.is_some())
    }

    /// Same check, returning the authenticated user
    pub async fn execute_for_user(&self, input: AuthenticateInput) -> AccountResult<Option<User>> {
        if input.user_name.trim().is_empty() {
            return Err(AccountError::Validation(
                "User name cannot be empty".to_string(),
            ));
        }
        let raw_password = RawPassword::for_verification(input.password)?;

        let Some(user) = self.find_user(&input.user_name).await? else {
            tracing::warn!(user_name = %input.user_name, "Sign in failed: unknown user");
            return Ok(None);
        };

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            tracing::warn!(user_name = %user.user_name, "Sign in failed: wrong password");
            return Ok(None);
        }

        if user.password_hash.needs_rehash() {
            self.upgrade_hash(&user, &raw_password).await;
        }

        tracing::info!(user_name = %user.user_name, "User signed in");

        Ok(Some(user))
    }

    /// First stored user matching one of the lookup keys
    async fn find_user(&self, raw: &str) -> AccountResult<Option<User>> {
        for key in UserName::lookup_keys(raw) {
            if let Some(user) = self.user_repo.find_by_user_name(&key).await? {
                return Ok(Some(user));
            }
        }
        Ok(None)
    }

    /// Replace a legacy digest with a fresh Argon2id hash
    ///
    /// A failure here is logged and does not fail the sign in.
    async fn upgrade_hash(&self, user: &User, raw_password: &RawPassword) {
        let upgraded = match UserPassword::from_raw(raw_password, self.config.pepper()) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::warn!(user_name = %user.user_name, error = %e, "Password rehash failed");
                return;
            }
        };

        match self
            .user_repo
            .update_password_hash(&user.user_name, &upgraded)
            .await
        {
            Ok(()) => {
                tracing::info!(user_name = %user.user_name, "Upgraded legacy password hash");
            }
            Err(e) => {
                tracing::warn!(user_name = %user.user_name, error = %e, "Password rehash not stored");
            }
        }
    }
}
