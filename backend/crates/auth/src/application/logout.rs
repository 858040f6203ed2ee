//! Logout Use Case
//!
//! Logout never fails and revokes nothing: the caller clears the cookie,
//! and any copy of the token stays valid until it expires.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenVerifier;
use crate::domain::repository::CredentialStore;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: CredentialStore,
{
    verifier: TokenVerifier<S>,
}

impl<S> LogoutUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            verifier: TokenVerifier::new(store, config),
        }
    }

    /// Log who is leaving, if the token says so
    pub async fn execute(&self, token: Option<&str>) {
        let Some(token) = token else {
            tracing::debug!("Logout without auth token");
            return;
        };

        match self.verifier.verify(token).await {
            Ok(user) => {
                tracing::info!(user_id = %user.user_id, "User logged out");
            }
            Err(e) => {
                tracing::debug!(error = %e, "Logout with unusable auth token");
            }
        }
    }
}
