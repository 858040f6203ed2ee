//! User Entity
//!
//! Identity record: who the user is and the password material to prove it.
//! Hashing lives in `platform::password`; this is plain data.

use chrono::{DateTime, Utc};
use platform::password::PasswordDigest;
use serde::Serialize;

use crate::domain::value_object::{user_id::UserId, user_name::UserName};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Opaque UUIDv4 identifier
    pub user_id: UserId,
    /// User name (unique, case-sensitive)
    pub user_name: UserName,
    /// Argon2id hash and salt
    pub password: PasswordDigest,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(user_name: UserName, password: PasswordDigest) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            password,
            created_at: Utc::now(),
        }
    }

    /// Public view that never carries password material
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.user_id.to_string(),
            username: self.user_name.as_str().to_string(),
        }
    }
}

/// Public identity summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_has_no_password_material() {
        let user = User::new(
            UserName::new("testuser1").unwrap(),
            PasswordDigest::placeholder(),
        );
        let summary = user.summary();
        assert_eq!(summary.id, user.user_id.to_string());
        assert_eq!(summary.username, "testuser1");

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 2);
    }
}
