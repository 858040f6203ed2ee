//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations used by the feature crates:
//! - Cryptographic utilities (HMAC-SHA256, Base64, CSPRNG)
//! - Password hashing (Argon2id with an explicit per-user salt)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
