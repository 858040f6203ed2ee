//! Shared Kernel - the vocabulary every crate agrees on
//!
//! - Common error types and result aliases
//! - Typed identifiers
//!
//! Only things whose meaning is identical across the auth and catalog
//! crates live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
