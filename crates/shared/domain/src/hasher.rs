//! One-way credential hashing behind a narrow capability trait.
//!
//! Validation logic never touches a hashing library directly; it goes through
//! [`CredentialHasher`] so the primitive can be swapped without changes to the
//! policy.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{
    ARGON2_PREFIX, BCRYPT_PREFIX, DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST,
};
use crate::error::{DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hash and verify capability consumed by the [`Password`](crate::Password) value object.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait CredentialHasher: Send + Sync {
    /// Derive a salted one-way hash from plaintext
    fn hash(&self, plaintext: &str) -> DomainResult<String>;

    /// Check plaintext against a hash produced by this hasher.
    /// Malformed hashes verify as false.
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

/// Supported hashing schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Bcrypt,
    Argon2,
}

impl HashAlgorithm {
    /// Identify the scheme an encoded hash was produced with
    pub fn detect(hash: &str) -> Option<Self> {
        if hash.starts_with(BCRYPT_PREFIX) {
            Some(HashAlgorithm::Bcrypt)
        } else if hash.starts_with(ARGON2_PREFIX) {
            Some(HashAlgorithm::Argon2)
        } else {
            None
        }
    }

    /// Hasher for this scheme with default parameters
    pub fn hasher(&self) -> Box<dyn CredentialHasher> {
        match self {
            HashAlgorithm::Bcrypt => Box::new(BcryptHasher::default()),
            HashAlgorithm::Argon2 => Box::new(Argon2Hasher),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Bcrypt => "bcrypt",
            HashAlgorithm::Argon2 => "argon2",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bcrypt" => Ok(HashAlgorithm::Bcrypt),
            "argon2" | "argon2id" => Ok(HashAlgorithm::Argon2),
            other => Err(DomainError::invalid_argument(
                "algorithm",
                format!("unknown hash algorithm '{}'", other),
            )),
        }
    }
}

/// bcrypt hasher, the reference algorithm (`$2b$`, 60 characters).
///
/// bcrypt only reads the first 72 bytes of its input, so the plaintext is
/// first reduced to a hex-encoded SHA-256 digest (64 bytes) and the whole
/// credential takes part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Create a bcrypt hasher with an explicit work factor.
    ///
    /// # Errors
    /// Returns an invalid argument error if `cost` is outside 4..=31.
    pub fn new(cost: u32) -> DomainResult<Self> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(DomainError::invalid_argument(
                "cost",
                format!(
                    "bcrypt cost must be between {} and {}, got {}",
                    MIN_BCRYPT_COST, MAX_BCRYPT_COST, cost
                ),
            ));
        }
        Ok(Self { cost })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    fn prehash(plaintext: &str) -> String {
        hex::encode(Sha256::digest(plaintext.as_bytes()))
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(Self::prehash(plaintext), self.cost)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match bcrypt::verify(Self::prehash(plaintext), hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "bcrypt verification failed");
                false
            }
        }
    }
}

/// Argon2id hasher producing PHC strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid argon2 hash format");
                return false;
            }
        };
        Self::argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}
