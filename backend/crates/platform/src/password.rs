//! Password Hashing and Verification
//!
//! - Argon2id hashing with a random salt per password (PHC string storage)
//! - Verification of legacy unsalted SHA-256 hex digests, flagged for rehash
//! - Zeroization of clear text on drop
//! - Constant-time comparison on both paths
//!
//! ## Examples
//! ```rust
//! use platform::password::{ClearTextPassword, HashedPassword};
//!
//! let password = ClearTextPassword::new("correct horse".to_string()).unwrap();
//! let hashed = password.hash(None).unwrap();
//! assert!(hashed.verify(&password, None));
//! assert!(!hashed.needs_rehash());
//! ```

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, sha256_hex};

/// Maximum password length in Unicode code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Length of a legacy SHA-256 hex digest
const LEGACY_DIGEST_LEN: usize = 64;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password, zeroized on drop
///
/// Keeps the NFKC-normalized form for Argon2id and the input as typed for
/// legacy digests, which were computed over the raw UTF-8 bytes.
/// Does not implement `Clone`; `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword {
    normalized: String,
    raw: String,
}

impl ClearTextPassword {
    /// Create a password for registration, enforcing the policy
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let password = Self::for_verification(raw);

        if password.normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = password.normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if password
            .normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(password)
    }

    /// Wrap a login attempt without applying the policy
    ///
    /// A password that would fail the policy can never match a stored hash,
    /// so login only normalizes.
    pub fn for_verification(raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        Self { normalized, raw }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.normalized.as_bytes()
    }

    /// Input as typed, before normalization
    pub(crate) fn raw_bytes(&self) -> &[u8] {
        self.raw.as_bytes()
    }

    /// Hash the password using Argon2id with a fresh salt
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let mut password_bytes = peppered(self, pepper);

        let salt = SaltString::generate(&mut OsRng);

        // Argon2::default() is Argon2id, m=19456 KiB, t=2, p=1
        let result = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map(|hash| HashedPassword {
                hash: hash.to_string(),
            })
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()));

        password_bytes.zeroize();
        result
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

fn peppered(password: &ClearTextPassword, pepper: Option<&[u8]>) -> Vec<u8> {
    let mut bytes = password.as_bytes().to_vec();
    if let Some(p) = pepper {
        bytes.extend_from_slice(p);
    }
    bytes
}

/// Unsalted single-round SHA-256 hex digest
///
/// Format of password hashes written by earlier deployments. Only used to
/// recognise and verify those rows; new hashes are always Argon2id.
pub fn legacy_sha256_hex(password: &str) -> String {
    sha256_hex(password.as_bytes())
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Storage scheme of a [`HashedPassword`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// PHC string produced by [`ClearTextPassword::hash`]
    Argon2id,
    /// 64 hex characters, see [`legacy_sha256_hex`]
    LegacySha256,
}

/// Stored password hash
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Parse a stored hash, accepting PHC strings and legacy hex digests
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        if is_legacy_digest(&hash) {
            return Ok(Self {
                hash: hash.to_ascii_lowercase(),
            });
        }

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Value written to the `password_hash` column
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn scheme(&self) -> HashScheme {
        if is_legacy_digest(&self.hash) {
            HashScheme::LegacySha256
        } else {
            HashScheme::Argon2id
        }
    }

    /// Verify a password against this hash
    ///
    /// The pepper only applies to Argon2id hashes; legacy digests never had one.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        match self.scheme() {
            HashScheme::LegacySha256 => {
                let candidate = sha256_hex(password.raw_bytes());
                constant_time_eq(candidate.as_bytes(), self.hash.as_bytes())
            }
            HashScheme::Argon2id => {
                let parsed_hash = match PasswordHash::new(&self.hash) {
                    Ok(h) => h,
                    Err(_) => return false,
                };

                let mut password_bytes = peppered(password, pepper);
                let ok = Argon2::default()
                    .verify_password(&password_bytes, &parsed_hash)
                    .is_ok();
                password_bytes.zeroize();
                ok
            }
        }
    }

    /// True when the hash should be replaced by a fresh Argon2id hash
    pub fn needs_rehash(&self) -> bool {
        match self.scheme() {
            HashScheme::LegacySha256 => true,
            HashScheme::Argon2id => match PasswordHash::new(&self.hash) {
                Ok(parsed) => parsed.algorithm != argon2::Algorithm::Argon2id.ident(),
                Err(_) => true,
            },
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("scheme", &self.scheme())
            .field("hash", &"[HASH]")
            .finish()
    }
}

fn is_legacy_digest(s: &str) -> bool {
    s.len() == LEGACY_DIGEST_LEN && s.bytes().all(|b| b.is_ascii_hexdigit())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn password(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_empty_or_whitespace() {
        assert_eq!(
            ClearTextPassword::new(String::new()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
        assert_eq!(
            ClearTextPassword::new("    ".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("pass\u{0007}word".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::InvalidCharacter);
    }

    #[test]
    fn test_unicode_password() {
        assert!(ClearTextPassword::new("パスワード安全です!".to_string()).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let hashed = password("TestPassword123!").hash(None).unwrap();

        assert_eq!(hashed.scheme(), HashScheme::Argon2id);
        assert!(hashed.as_str().starts_with("$argon2id$"));
        assert!(hashed.verify(&password("TestPassword123!"), None));
        assert!(!hashed.verify(&password("WrongPassword123!"), None));
        assert!(!hashed.needs_rehash());
    }

    #[test]
    fn test_same_password_hashes_differ() {
        let a = password("same-password").hash(None).unwrap();
        let b = password("same-password").hash(None).unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_hash_with_pepper() {
        let pepper = b"my_secret_pepper";
        let hashed = password("TestPassword123!").hash(Some(pepper)).unwrap();

        assert!(hashed.verify(&password("TestPassword123!"), Some(pepper)));
        assert!(!hashed.verify(&password("TestPassword123!"), None));
        assert!(!hashed.verify(&password("TestPassword123!"), Some(b"wrong_pepper")));
    }

    #[test]
    fn test_stored_roundtrip() {
        let hashed = password("TestPassword123!").hash(None).unwrap();
        let restored = HashedPassword::from_stored(hashed.as_str().to_string()).unwrap();
        assert!(restored.verify(&password("TestPassword123!"), None));
    }

    #[test]
    fn test_legacy_digest_verifies_and_needs_rehash() {
        let digest = legacy_sha256_hex("password");
        assert_eq!(
            digest,
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );

        let stored = HashedPassword::from_stored(digest).unwrap();
        assert_eq!(stored.scheme(), HashScheme::LegacySha256);
        assert!(stored.verify(&ClearTextPassword::for_verification("password".into()), None));
        assert!(!stored.verify(&ClearTextPassword::for_verification("Password".into()), None));
        assert!(stored.needs_rehash());
    }

    #[test]
    fn test_legacy_digest_uses_unnormalized_input() {
        // Full-width letters and a circled digit change under NFKC
        let typed = "ｐａｓｓｗｏｒｄ①";
        let stored = HashedPassword::from_stored(legacy_sha256_hex(typed)).unwrap();

        assert!(stored.verify(&ClearTextPassword::for_verification(typed.into()), None));
        assert!(!stored.verify(&ClearTextPassword::for_verification("password1".into()), None));

        let upgraded = ClearTextPassword::for_verification(typed.into())
            .hash(None)
            .unwrap();
        assert!(upgraded.verify(&ClearTextPassword::for_verification(typed.into()), None));
        assert!(upgraded.verify(&ClearTextPassword::for_verification("password1".into()), None));
    }

    #[test]
    fn test_legacy_digest_accepts_uppercase_hex() {
        let digest = legacy_sha256_hex("hunter2").to_uppercase();
        let stored = HashedPassword::from_stored(digest).unwrap();
        assert!(stored.verify(&ClearTextPassword::for_verification("hunter2".into()), None));
    }

    #[test]
    fn test_invalid_stored_hash() {
        assert!(HashedPassword::from_stored("not_a_valid_hash").is_err());
        assert!(HashedPassword::from_stored("").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let secret = ClearTextPassword::for_verification("secret".to_string());
        let debug_output = format!("{:?}", secret);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password("secret-ish").hash(None).unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2id$"));
    }
}
