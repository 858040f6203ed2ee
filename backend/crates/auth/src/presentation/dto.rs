//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub msg: String,
    pub id: String,
    pub username: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Login response; the token itself only travels in the cookie
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

// ============================================================================
// Logout
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LogoutResponse {
    pub msg: String,
}

// ============================================================================
// Current User
// ============================================================================

/// Current user info response
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_debug_redacts_password() {
        let register: RegisterRequest =
            serde_json::from_str(r#"{"username":"testuser1","password":"hunter2hunter2"}"#)
                .unwrap();
        let login = LoginRequest {
            username: register.username.clone(),
            password: register.password.clone(),
        };

        for debug in [format!("{register:?}"), format!("{login:?}")] {
            assert!(debug.contains("testuser1"));
            assert!(!debug.contains("hunter2hunter2"));
            assert!(debug.contains("[REDACTED]"));
        }
    }
}
