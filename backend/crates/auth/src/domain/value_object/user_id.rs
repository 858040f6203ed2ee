//! User Id
//!
//! Opaque UUIDv4 identifying an identity record; it is the token subject.

pub use kernel::id::UserId;
