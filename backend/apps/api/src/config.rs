//! Server Configuration
//!
//! Everything is read from the environment once at startup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::config::{AuthConfig, MIN_TOKEN_SECRET_LEN};

const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres URL; `None` runs on the in-memory credential store
    pub database_url: Option<String>,
    pub auth: AuthConfig,
    /// Browser origin allowed by CORS
    pub client_url: String,
    pub port: u16,
    /// Directory served for unmatched routes
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut auth = match get("AUTH_TOKEN_SECRET") {
            Some(secret) => {
                if secret.len() < MIN_TOKEN_SECRET_LEN {
                    bail!("AUTH_TOKEN_SECRET must be at least {MIN_TOKEN_SECRET_LEN} bytes");
                }
                AuthConfig::with_secret(secret.into_bytes())
            }
            None if cfg!(debug_assertions) => {
                tracing::warn!("AUTH_TOKEN_SECRET not set, using a random secret");
                AuthConfig::default()
            }
            None => bail!("AUTH_TOKEN_SECRET must be set in production"),
        };

        if let Some(ttl) = get("AUTH_TOKEN_TTL_SECS") {
            let secs: u64 = ttl
                .parse()
                .with_context(|| format!("AUTH_TOKEN_TTL_SECS is not a number: {ttl}"))?;
            if secs == 0 {
                bail!("AUTH_TOKEN_TTL_SECS must be positive");
            }
            auth.token_ttl = Duration::from_secs(secs);
        }

        if let Some(secure) = get("AUTH_COOKIE_SECURE") {
            auth.cookie_secure = parse_bool(&secure)
                .with_context(|| format!("AUTH_COOKIE_SECURE is not a boolean: {secure}"))?;
        }

        if let Some(same_site) = get("AUTH_COOKIE_SAME_SITE") {
            auth.cookie_same_site = same_site
                .parse()
                .map_err(anyhow::Error::msg)
                .context("AUTH_COOKIE_SAME_SITE")?;
        }

        auth.password_pepper = get("AUTH_PASSWORD_PEPPER").map(String::into_bytes);

        let port = match get("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: get("DATABASE_URL"),
            auth,
            client_url: get("CLIENT_URL").unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            port,
            static_dir: get("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::config::SameSite;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("AUTH_TOKEN_SECRET", SECRET)]).unwrap();
        assert_eq!(config.database_url, None);
        assert_eq!(config.port, 3000);
        assert_eq!(config.client_url, "http://localhost:5173");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.auth.token_ttl, Duration::from_secs(3600));
        assert!(config.auth.cookie_secure);
        assert_eq!(config.auth.token_secret, SECRET.as_bytes());
        assert!(config.auth.password_pepper.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("AUTH_TOKEN_SECRET", SECRET),
            ("AUTH_TOKEN_TTL_SECS", "600"),
            ("AUTH_COOKIE_SECURE", "false"),
            ("DATABASE_URL", "postgres://localhost/cheese"),
            ("CLIENT_URL", "https://cheese.example"),
            ("PORT", "8080"),
            ("STATIC_DIR", "dist"),
            ("AUTH_PASSWORD_PEPPER", "pepper"),
        ])
        .unwrap();

        assert_eq!(config.auth.token_ttl_secs(), 600);
        assert!(!config.auth.cookie_secure);
        assert_eq!(config.auth.cookie_config().same_site, SameSite::Lax);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/cheese"));
        assert_eq!(config.client_url, "https://cheese.example");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
    }

    #[test]
    fn test_short_secret_rejected() {
        assert!(config(&[("AUTH_TOKEN_SECRET", "too-short")]).is_err());
    }

    #[test]
    fn test_bad_numbers_rejected() {
        assert!(config(&[("AUTH_TOKEN_SECRET", SECRET), ("PORT", "http")]).is_err());
        assert!(config(&[("AUTH_TOKEN_SECRET", SECRET), ("AUTH_TOKEN_TTL_SECS", "0")]).is_err());
        assert!(config(&[("AUTH_TOKEN_SECRET", SECRET), ("AUTH_COOKIE_SECURE", "maybe")]).is_err());
    }

    #[test]
    fn test_blank_database_url_means_none() {
        let config = config(&[("AUTH_TOKEN_SECRET", SECRET), ("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_missing_secret_in_debug_is_random() {
        if cfg!(debug_assertions) {
            let config = config(&[]).unwrap();
            assert_eq!(config.auth.token_secret.len(), MIN_TOKEN_SECRET_LEN);
        } else {
            assert!(config(&[]).is_err());
        }
    }
}
