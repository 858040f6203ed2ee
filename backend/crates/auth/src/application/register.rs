//! Register Use Case
//!
//! Creates a new identity record.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::{User, UserSummary};
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> RegisterUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    /// Validate, hash, then insert
    ///
    /// There is no existence pre-check: the store rejects a taken name as
    /// part of the insert, which is what makes concurrent registrations safe.
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<UserSummary> {
        let user_name =
            UserName::new(input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Argon2 is CPU-bound; keep it off the async workers
        let hasher = self.config.password_hasher();
        let digest = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await?
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(user_name, digest);
        self.store.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(user.summary())
    }
}
