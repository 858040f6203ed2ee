//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity record, value objects, credential store trait
//! - `application/` - Use cases and token issue/verify
//! - `infra/` - Postgres and in-memory credential stores
//! - `presentation/` - HTTP handlers, DTOs, cookie transport, router
//!
//! ## Features
//! - Registration with user name + password
//! - Login issuing a signed, expiring token in an `authToken` cookie
//! - Stateless logout (cookie cleared, token not revoked)
//! - `require_auth` middleware for protecting other routers
//!
//! ## Security Model
//! - Passwords hashed with Argon2id and a per-user random salt
//! - Tokens signed with HMAC-SHA256; no server-side session state
//! - Unknown user and wrong password are indistinguishable to clients
//! - Every token failure is a bare 401 "Unauthorized"

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::repository::CredentialStore;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryCredentialStore, postgres::PgCredentialStore};
pub use presentation::router::auth_routes;

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
