//! In-Memory Credential Store
//!
//! Used when no database is configured and in tests. State lives for the
//! lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, User>,
    /// user name -> id
    by_name: HashMap<String, UserId>,
}

/// Credential store backed by a `HashMap`
///
/// Insert-if-absent happens under a single write lock, so two concurrent
/// registrations of one name cannot both succeed.
#[derive(Clone, Default)]
pub struct InMemoryCredentialStore {
    users: Arc<RwLock<Users>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities
    pub async fn len(&self) -> usize {
        self.users.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .by_name
            .get(user_name)
            .and_then(|id| users.by_id.get(id))
            .cloned())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.by_id.get(user_id).cloned())
    }

    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;

        let name = user.user_name.as_str();
        if users.by_name.contains_key(name) {
            return Err(AuthError::UserNameTaken);
        }

        users.by_name.insert(name.to_string(), user.user_id);
        users.by_id.insert(user.user_id, user.clone());

        Ok(())
    }
}
