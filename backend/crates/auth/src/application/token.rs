//! Access Tokens
//!
//! Stateless signed tokens: `<claims>.<signature>`, both base64url without
//! padding. Claims are JSON; the signature is HMAC-SHA256 over the encoded
//! claims text. Nothing is persisted, so a token lives until its `exp`.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Signed identity claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user id
    pub sub: String,
    pub user_name: String,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expires-at, unix seconds
    pub exp: i64,
}

impl TokenClaims {
    /// Expired only strictly after `exp`; the boundary second is still valid
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}

/// Issued token text plus the claims it carries
#[derive(Clone)]
pub struct AccessToken {
    token: String,
    claims: TokenClaims,
}

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &TokenClaims {
        &self.claims
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[REDACTED]")
            .field("claims", &self.claims)
            .finish()
    }
}

// ============================================================================
// Issuer
// ============================================================================

/// Signs identity claims
pub struct TokenIssuer {
    config: Arc<AuthConfig>,
}

impl TokenIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn issue(&self, user: &User) -> AuthResult<AccessToken> {
        self.issue_at(user, Utc::now())
    }

    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> AuthResult<AccessToken> {
        let iat = now.timestamp();
        let claims = TokenClaims {
            sub: user.user_id.to_string(),
            user_name: user.user_name.as_str().to_string(),
            iat,
            exp: iat.saturating_add(self.config.token_ttl_secs()),
        };

        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("Failed to encode claims: {e}")))?;
        let payload_b64 = to_base64url(&payload);
        let signature = hmac_sha256(&self.config.token_secret, payload_b64.as_bytes());

        Ok(AccessToken {
            token: format!("{}.{}", payload_b64, to_base64url(&signature)),
            claims,
        })
    }
}

// ============================================================================
// Verifier
// ============================================================================

/// Checks signature and expiry, then resolves the subject
pub struct TokenVerifier<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> TokenVerifier<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { store, config }
    }

    pub async fn verify(&self, token: &str) -> AuthResult<User> {
        self.verify_at(token, Utc::now()).await
    }

    /// Signature, then expiry, then subject lookup
    pub async fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<User> {
        let claims = self.decode(token)?;

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired);
        }

        let user_id: UserId = claims
            .sub
            .parse()
            .map_err(|_| AuthError::UnknownSubject)?;

        self.store
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UnknownSubject)
    }

    /// Check the signature and parse the claims
    ///
    /// Claims are only parsed after the signature matched.
    pub fn decode(&self, token: &str) -> AuthResult<TokenClaims> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or(AuthError::InvalidSignature)?;

        let signature =
            from_base64url(signature_b64).map_err(|_| AuthError::InvalidSignature)?;

        if !verify_hmac_sha256(&self.config.token_secret, payload_b64.as_bytes(), &signature) {
            return Err(AuthError::InvalidSignature);
        }

        let payload = from_base64url(payload_b64).map_err(|_| AuthError::InvalidSignature)?;
        serde_json::from_slice(&payload).map_err(|_| AuthError::InvalidSignature)
    }
}
