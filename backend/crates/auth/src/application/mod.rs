//! Application Layer
//!
//! Use cases and application services.

pub mod authorize;
pub mod config;
pub mod login;
pub mod logout;
pub mod register;
pub mod token;

// Re-exports
pub use authorize::AuthorizeUseCase;
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{AccessToken, TokenClaims, TokenIssuer, TokenVerifier};
