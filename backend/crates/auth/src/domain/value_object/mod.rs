//! Value Object Module

pub mod user_id;
pub mod user_name;

pub use user_id::UserId;
pub use user_name::{UserName, UserNameError};
