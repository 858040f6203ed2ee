//! Login Use Case
//!
//! Verifies credentials and issues an access token.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordDigest};

use crate::application::config::AuthConfig;
use crate::application::token::{AccessToken, TokenIssuer};
use crate::domain::entity::user::UserSummary;
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: UserSummary,
    pub token: AccessToken,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> LoginUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    /// Unknown user and wrong password both end in `InvalidCredentials`
    ///
    /// The user name is not validated, only trimmed for lookup. When no
    /// user matches, the password is still run through Argon2 against a
    /// placeholder digest.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let lookup_key = UserName::lookup_key(&input.user_name);
        let user = self.store.find_by_user_name(lookup_key).await?;

        let digest = user
            .as_ref()
            .map(|u| u.password.clone())
            .unwrap_or_else(PasswordDigest::placeholder);
        let password = ClearTextPassword::unchecked(input.password);

        let hasher = self.config.password_hasher();
        let password_valid =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &digest)).await?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let token = TokenIssuer::new(self.config.clone()).issue(&user)?;

        tracing::info!(
            user_id = %user.user_id,
            expires_at = token.claims().exp,
            "User logged in"
        );

        Ok(LoginOutput {
            user: user.summary(),
            token,
        })
    }
}
