//! Session Transport
//!
//! The auth token travels only in the `authToken` cookie.

use axum::http::{HeaderMap, HeaderValue};
use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// `Set-Cookie` value carrying the token
pub fn attach(config: &AuthConfig, token: &str) -> AuthResult<HeaderValue> {
    set_cookie_header(&config.cookie_config(), token)
        .map_err(|e| AuthError::Internal(format!("Invalid auth cookie: {e}")))
}

/// `Set-Cookie` value that empties and expires the cookie
pub fn clear(config: &AuthConfig) -> AuthResult<HeaderValue> {
    delete_cookie_header(&config.cookie_config())
        .map_err(|e| AuthError::Internal(format!("Invalid auth cookie: {e}")))
}

/// Token from the request's auth cookie; an empty cookie counts as absent
pub fn extract(config: &AuthConfig, headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, &config.cookie_name).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    #[test]
    fn test_attach_sets_policy() {
        let config = AuthConfig::default();
        let value = attach(&config, "abc.def").unwrap();
        let value = value.to_str().unwrap();

        assert!(value.starts_with("authToken=abc.def"));
        assert!(value.contains("HttpOnly"));
        assert!(value.contains("Secure"));
        assert!(value.contains("SameSite=None"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("Max-Age=3600"));
    }

    #[test]
    fn test_development_cookie_is_lax_without_secure() {
        let value = attach(&AuthConfig::development(), "abc.def").unwrap();
        let value = value.to_str().unwrap();

        assert!(!value.contains("Secure"));
        assert!(value.contains("SameSite=Lax"));
    }

    #[test]
    fn test_clear_expires_cookie() {
        let value = clear(&AuthConfig::default()).unwrap();
        let value = value.to_str().unwrap();

        assert!(value.starts_with("authToken=;"));
        assert!(value.contains("Max-Age=0"));
        assert!(value.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
    }

    #[test]
    fn test_extract_ignores_empty_cookie() {
        let config = AuthConfig::default();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("authToken="));
        assert_eq!(extract(&config, &headers), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("authToken=abc.def"));
        assert_eq!(extract(&config, &headers), Some("abc.def".to_string()));
    }
}
