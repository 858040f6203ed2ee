//! Authorize Use Case
//!
//! Resolves the user behind a request's auth token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenVerifier;
use crate::domain::entity::user::User;
use crate::domain::repository::CredentialStore;
use crate::error::{AuthError, AuthResult};

/// Authorize use case
pub struct AuthorizeUseCase<S>
where
    S: CredentialStore,
{
    verifier: TokenVerifier<S>,
}

impl<S> AuthorizeUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            verifier: TokenVerifier::new(store, config),
        }
    }

    pub async fn execute(&self, token: Option<&str>) -> AuthResult<User> {
        let token = token.ok_or(AuthError::TokenMissing)?;
        self.verifier.verify(token).await
    }
}
