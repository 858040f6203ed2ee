//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! shared read-only behind an `Arc`.

use std::fmt;
use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::crypto::random_bytes;
use platform::password::PasswordHasher;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Name of the cookie that carries the auth token
pub const AUTH_COOKIE_NAME: &str = "authToken";

/// Minimum accepted token secret length in bytes
pub const MIN_TOKEN_SECRET_LEN: usize = 32;

/// Default token lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Auth cookie name
    pub cookie_name: String,
    /// HMAC-SHA256 key for signing tokens
    pub token_secret: Vec<u8>,
    /// Token lifetime; also the cookie Max-Age
    pub token_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

/// Defaults with a fresh random token secret
///
/// Tokens stop verifying whenever the process restarts; deployments supply
/// their own secret through [`AuthConfig::with_secret`].
impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: AUTH_COOKIE_NAME.to_string(),
            token_secret: random_bytes(MIN_TOKEN_SECRET_LEN),
            token_ttl: DEFAULT_TOKEN_TTL,
            cookie_secure: true,
            cookie_same_site: SameSite::None,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Create config with a provided token secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Hasher carrying this config's pepper
    pub fn password_hasher(&self) -> PasswordHasher {
        PasswordHasher::new(self.password_pepper.clone())
    }

    /// SameSite actually sent with the cookie
    ///
    /// Browsers drop `SameSite=None` cookies without `Secure`, so an insecure
    /// cookie falls back to `Lax`.
    pub fn effective_same_site(&self) -> SameSite {
        match self.cookie_same_site {
            SameSite::None if !self.cookie_secure => SameSite::Lax,
            same_site => same_site,
        }
    }

    /// Cookie policy for the auth cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.effective_same_site(),
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl_secs()),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("cookie_name", &self.cookie_name)
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.cookie_name, "authToken");
        assert_eq!(config.token_ttl_secs(), 3600);
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::None);
    }

    #[test]
    fn test_default_secret_is_random() {
        let a = AuthConfig::default();
        let b = AuthConfig::default();
        assert_eq!(a.token_secret.len(), MIN_TOKEN_SECRET_LEN);
        assert_ne!(a.token_secret, b.token_secret);
        assert!(a.token_secret.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn test_development_cookie_is_insecure_and_lax() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert_eq!(config.cookie_config().same_site, SameSite::Lax);
    }

    #[test]
    fn test_insecure_cookie_never_same_site_none() {
        let config = AuthConfig {
            cookie_secure: false,
            ..AuthConfig::default()
        };
        assert_eq!(config.effective_same_site(), SameSite::Lax);

        let strict = AuthConfig {
            cookie_secure: false,
            cookie_same_site: SameSite::Strict,
            ..AuthConfig::default()
        };
        assert_eq!(strict.effective_same_site(), SameSite::Strict);

        assert_eq!(AuthConfig::default().effective_same_site(), SameSite::None);
    }

    #[test]
    fn test_cookie_config_uses_ttl() {
        let cookie = AuthConfig::default().cookie_config();
        assert_eq!(cookie.max_age_secs, Some(3600));
        assert!(cookie.http_only);
        assert_eq!(cookie.path, "/");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::with_secret(b"super-secret-value-that-is-long!!".to_vec());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
