//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AccountError, AccountResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
    /// Second copy of the password, checked when present
    pub password_confirmation: Option<String>,
}

impl SignUpInput {
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            password: password.into(),
            password_confirmation: None,
        }
    }

    pub fn confirmed_by(mut self, confirmation: impl Into<String>) -> Self {
        self.password_confirmation = Some(confirmation.into());
        self
    }
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_name: UserName,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AccountResult<SignUpOutput> {
        let user_name = UserName::new(&input.user_name)
            .map_err(|e| AccountError::Validation(e.to_string()))?;

        if let Some(confirmation) = &input.password_confirmation {
            if *confirmation != input.password {
                return Err(AccountError::Validation(
                    "Passwords do not match".to_string(),
                ));
            }
        }

        let raw_password = RawPassword::new(input.password, &self.config.password_policy)?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let user = User::new(user_name, password_hash);

        // No existence pre-check: the UNIQUE constraint decides
        self.user_repo.create(&user).await?;

        tracing::info!(user_name = %user.user_name, "User signed up");

        Ok(SignUpOutput {
            user_name: user.user_name,
        })
    }
}
