//! Password Hashing and Verification
//!
//! Salted one-way hashing with:
//! - Argon2id raw output (memory-hard)
//! - A fresh 16-byte salt per hash, drawn from the OS CSPRNG
//! - Hash and salt stored side by side as base64 text
//! - Constant-time comparison on verify
//! - Zeroization of clear text and peppered buffers
//!
//! The hasher is a standalone capability. Identity records only carry the
//! resulting [`PasswordDigest`]; they never hash or verify themselves.

use std::fmt;

use argon2::Argon2;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::{constant_time_eq, from_base64, random_bytes, to_base64};

// ============================================================================
// Constants
// ============================================================================

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Derived hash length in bytes
pub const HASH_LEN: usize = 32;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is empty or whitespace only
    #[error("Password cannot be empty")]
    EmptyOrWhitespace,

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains control characters
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Argon2 rejected the input or parameters
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash or salt is not valid base64 of the expected length
    #[error("Invalid password digest encoding")]
    InvalidEncoding,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// - Unicode is NFKC-normalized before anything else
/// - No `Clone`, so copies are always explicit
/// - `Debug` is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalize and validate user input
    ///
    /// Rejects empty/whitespace-only input, input longer than
    /// [`MAX_PASSWORD_LENGTH`] code points, and control characters other
    /// than space, tab and newline.
    pub fn new(mut raw: String) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != ' ' && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    /// Wrap input as-is, skipping the policy
    ///
    /// Used on the login path: whatever the client sends is only ever
    /// compared, so it must not be rejected with a different error shape.
    pub fn unchecked(mut raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Password Digest (Safe to store)
// ============================================================================

/// Stored password material: base64 hash and base64 salt
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    hash: String,
    salt: String,
}

impl PasswordDigest {
    /// Rebuild from stored columns, checking both decode to the right length
    pub fn from_parts(
        hash: impl Into<String>,
        salt: impl Into<String>,
    ) -> Result<Self, PasswordHashError> {
        let hash = hash.into();
        let salt = salt.into();

        let hash_ok = from_base64(&hash).is_ok_and(|bytes| bytes.len() == HASH_LEN);
        let salt_ok = from_base64(&salt).is_ok_and(|bytes| bytes.len() == SALT_LEN);
        if !hash_ok || !salt_ok {
            return Err(PasswordHashError::InvalidEncoding);
        }

        Ok(Self { hash, salt })
    }

    /// Well-formed digest that no password matches
    ///
    /// Verified against when the user does not exist, so a failed lookup
    /// costs the same Argon2 run as a wrong password.
    pub fn placeholder() -> Self {
        Self {
            hash: to_base64(&[0u8; HASH_LEN]),
            salt: to_base64(&[0u8; SALT_LEN]),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("hash", &"[HASH]")
            .field("salt", &"[SALT]")
            .finish()
    }
}

// ============================================================================
// Password Hasher
// ============================================================================

/// Argon2id hasher with an optional application-wide pepper
#[derive(Clone, Default)]
pub struct PasswordHasher {
    pepper: Option<Vec<u8>>,
}

impl PasswordHasher {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self { pepper }
    }

    /// Hash with a freshly generated salt
    pub fn hash(&self, password: &ClearTextPassword) -> Result<PasswordDigest, PasswordHashError> {
        let salt = random_bytes(SALT_LEN);
        let hash = self.derive(password, &salt)?;

        Ok(PasswordDigest {
            hash: to_base64(hash.as_slice()),
            salt: to_base64(&salt),
        })
    }

    /// Recompute with the stored salt and compare in constant time
    ///
    /// Undecodable digests verify as `false` rather than erroring.
    pub fn verify(&self, password: &ClearTextPassword, digest: &PasswordDigest) -> bool {
        let (Ok(expected), Ok(salt)) = (from_base64(&digest.hash), from_base64(&digest.salt))
        else {
            return false;
        };

        match self.derive(password, &salt) {
            Ok(actual) => constant_time_eq(actual.as_slice(), &expected),
            Err(e) => {
                tracing::warn!(error = %e, "Password verification could not derive hash");
                false
            }
        }
    }

    fn derive(
        &self,
        password: &ClearTextPassword,
        salt: &[u8],
    ) -> Result<Zeroizing<[u8; HASH_LEN]>, PasswordHashError> {
        let mut input = Zeroizing::new(password.as_bytes().to_vec());
        if let Some(pepper) = &self.pepper {
            input.extend_from_slice(pepper);
        }

        // OWASP defaults: m=19456 KiB, t=2, p=1
        let mut out = Zeroizing::new([0u8; HASH_LEN]);
        Argon2::default()
            .hash_password_into(&input, salt, out.as_mut_slice())
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(out)
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_empty_or_whitespace() {
        assert!(matches!(
            ClearTextPassword::new(String::new()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
        assert!(matches!(
            ClearTextPassword::new("        ".to_string()),
            Err(PasswordPolicyError::EmptyOrWhitespace)
        ));
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}def".to_string());
        assert!(matches!(result, Err(PasswordPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_simple_passwords_are_accepted() {
        assert!(ClearTextPassword::new("password123".to_string()).is_ok());
        assert!(ClearTextPassword::new("パスワード安全です!".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::default();
        let password = ClearTextPassword::unchecked("TestPassword123!".to_string());
        let digest = hasher.hash(&password).unwrap();

        assert!(hasher.verify(&password, &digest));

        let wrong = ClearTextPassword::unchecked("WrongPassword123!".to_string());
        assert!(!hasher.verify(&wrong, &digest));
    }

    #[test]
    fn test_salt_is_fresh_per_hash() {
        let hasher = PasswordHasher::default();
        let password = ClearTextPassword::unchecked("same-input".to_string());

        let a = hasher.hash(&password).unwrap();
        let b = hasher.hash(&password).unwrap();

        assert_ne!(a.salt(), b.salt());
        assert_ne!(a.hash(), b.hash());
        assert!(hasher.verify(&password, &a));
        assert!(hasher.verify(&password, &b));
    }

    #[test]
    fn test_hash_with_pepper() {
        let peppered = PasswordHasher::new(Some(b"my_secret_pepper".to_vec()));
        let password = ClearTextPassword::unchecked("TestPassword123!".to_string());
        let digest = peppered.hash(&password).unwrap();

        assert!(peppered.verify(&password, &digest));
        assert!(!PasswordHasher::default().verify(&password, &digest));
        assert!(!PasswordHasher::new(Some(b"wrong".to_vec())).verify(&password, &digest));
    }

    #[test]
    fn test_digest_from_parts_roundtrip() {
        let hasher = PasswordHasher::default();
        let password = ClearTextPassword::unchecked("TestPassword123!".to_string());
        let digest = hasher.hash(&password).unwrap();

        let restored = PasswordDigest::from_parts(digest.hash(), digest.salt()).unwrap();
        assert!(hasher.verify(&password, &restored));
    }

    #[test]
    fn test_digest_from_parts_rejects_bad_encoding() {
        assert!(PasswordDigest::from_parts("not base64!", to_base64(&[0u8; SALT_LEN])).is_err());
        assert!(PasswordDigest::from_parts(to_base64(&[0u8; HASH_LEN]), to_base64(b"short")).is_err());
    }

    #[test]
    fn test_placeholder_never_verifies() {
        let hasher = PasswordHasher::default();
        let password = ClearTextPassword::unchecked("anything".to_string());
        assert!(!hasher.verify(&password, &PasswordDigest::placeholder()));
    }

    #[test]
    fn test_nfkc_equivalent_inputs_verify() {
        let hasher = PasswordHasher::default();
        // Fullwidth "ＡＢＣ" normalizes to "ABC"
        let stored = ClearTextPassword::unchecked("ＡＢＣdefgh1".to_string());
        let digest = hasher.hash(&stored).unwrap();

        let typed = ClearTextPassword::unchecked("ABCdefgh1".to_string());
        assert!(hasher.verify(&typed, &digest));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::unchecked("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let digest = PasswordHasher::default().hash(&password).unwrap();
        let debug_output = format!("{:?}", digest);
        assert!(!debug_output.contains(digest.hash()));
    }
}
