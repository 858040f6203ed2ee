//! Presentation Layer
//!
//! HTTP handlers, DTOs, cookie transport, router, and middleware.

pub mod cookie;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{CurrentUser, require_auth};
pub use router::auth_routes;
