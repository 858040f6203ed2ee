//! Repository Traits
//!
//! Interfaces for credential persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Credential store trait
///
/// The store owns user name uniqueness: `create` must fail with
/// `AuthError::UserNameTaken` when the exact name is already present,
/// atomically with the insert.
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Find user by exact user name; absence is not an error
    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Persist a new user
    async fn create(&self, user: &User) -> AuthResult<()>;
}
