//! User Name Value Object
//!
//! The user name is the login handle of an identity.
//!
//! ## Rules
//! - Surrounding whitespace is trimmed; everything else is kept as given
//! - Comparison is exact: `TestUser1` and `testuser1` are different names
//!
//! ## Invariants
//! - Length: at least 8 characters (after trimming)
//! - No control characters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 8;

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after trimming
    Empty,

    /// User name is too short (minimum: USER_NAME_MIN_LENGTH)
    TooShort { length: usize, min: usize },

    /// User name contains a control character
    InvalidCharacter { position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "User name cannot be empty"),
            Self::TooShort { length, min } => {
                write!(f, "User name is too short ({length} chars, minimum {min})")
            }
            Self::InvalidCharacter { position } => {
                write!(f, "Invalid character at position {position}")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated user name; its text is also the uniqueness key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Trim and validate a user name for registration
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let name = input.as_ref().trim();
        Self::validate(name)?;
        Ok(Self(name.to_string()))
    }

    /// Lookup key for arbitrary input
    ///
    /// Trims like [`UserName::new`] without validating, so login can look up
    /// any name, including ones too short to register.
    pub fn lookup_key(input: &str) -> &str {
        input.trim()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rebuild from a stored value (already validated on the way in)
    pub fn from_db(name: String) -> Self {
        Self(name)
    }

    fn validate(name: &str) -> Result<(), UserNameError> {
        if name.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = name.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }

        if let Some(position) = name.chars().position(char::is_control) {
            return Err(UserNameError::InvalidCharacter { position });
        }

        Ok(())
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_name() {
        let name = UserName::new("testuser1").unwrap();
        assert_eq!(name.as_str(), "testuser1");
    }

    #[test]
    fn test_case_is_significant() {
        let lower = UserName::new("cheesefan42").unwrap();
        let mixed = UserName::new("CheeseFan42").unwrap();
        assert_eq!(mixed.as_str(), "CheeseFan42");
        assert_ne!(lower, mixed);
    }

    #[test]
    fn test_trimmed() {
        let name = UserName::new("  cheesefan  ").unwrap();
        assert_eq!(name.as_str(), "cheesefan");
    }

    #[test]
    fn test_inner_whitespace_allowed() {
        let name = UserName::new("cheese lover").unwrap();
        assert_eq!(name.as_str(), "cheese lover");
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            UserName::new("bob"),
            Err(UserNameError::TooShort { length: 3, min: 8 })
        );
        assert!(UserName::new("exactly8").is_ok());
        assert!(UserName::new("seven77").is_err());
        // Trimmed before counting
        assert!(UserName::new("  seven77  ").is_err());
    }

    #[test]
    fn test_long_names_accepted() {
        assert!(UserName::new("a".repeat(200)).is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
    }

    #[test]
    fn test_control_character_rejected() {
        assert_eq!(
            UserName::new("cheese\u{0}lover"),
            Err(UserNameError::InvalidCharacter { position: 6 })
        );
    }

    #[test]
    fn test_lookup_key_only_trims() {
        assert_eq!(UserName::lookup_key(" Bob "), "Bob");
        assert_eq!(UserName::lookup_key("TESTUSER1"), "TESTUSER1");
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&UserName::new("CheeseFan42").unwrap()).unwrap();
        assert_eq!(json, "\"CheeseFan42\"");
        assert!(serde_json::from_str::<UserName>("\"short\"").is_err());
    }
}
