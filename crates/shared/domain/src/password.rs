//! Password value object - validates, hashes and verifies credentials.

use std::hash::{Hash, Hasher};

use crate::constants::{is_special_character, MIN_PASSWORD_LENGTH};
use crate::error::{DomainResult, PasswordRule};
use crate::hasher::{BcryptHasher, CredentialHasher, HashAlgorithm};

/// Password value object holding a one-way hash, never the plaintext.
///
/// Immutable and compared by value: two passwords are equal iff their encoded
/// hashes are equal. The only way to obtain one is through the validating
/// factories [`Password::create`] and [`Password::create_with`].
#[derive(Clone)]
pub struct Password {
    hashed_value: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hashed_value", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Validate plaintext against the policy and hash it with bcrypt.
    ///
    /// # Errors
    /// Returns `InvalidCredential` naming the first rule the plaintext breaks,
    /// or `Internal` if the hashing primitive fails.
    pub fn create(plaintext: &str) -> DomainResult<Self> {
        Self::create_with(plaintext, &BcryptHasher::default())
    }

    /// Validate plaintext and hash it with the given hasher.
    ///
    /// The hasher is only invoked once every rule has passed.
    pub fn create_with(plaintext: &str, hasher: &dyn CredentialHasher) -> DomainResult<Self> {
        if let Err(rule) = Self::validate(plaintext) {
            tracing::debug!(rule = ?rule, "Password rejected by policy");
            return Err(rule.into());
        }

        let hashed_value = hasher.hash(plaintext)?;
        Ok(Self { hashed_value })
    }

    /// Check plaintext against the password policy.
    ///
    /// Rules are evaluated in order and the first failure is returned.
    pub fn validate(plaintext: &str) -> Result<(), PasswordRule> {
        if plaintext.trim().is_empty() {
            return Err(PasswordRule::Empty);
        }
        if plaintext.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordRule::TooShort);
        }
        if !plaintext.chars().any(char::is_uppercase) {
            return Err(PasswordRule::MissingUppercase);
        }
        if !plaintext.chars().any(char::is_lowercase) {
            return Err(PasswordRule::MissingLowercase);
        }
        if !plaintext.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordRule::MissingDigit);
        }
        if !plaintext.chars().any(is_special_character) {
            return Err(PasswordRule::MissingSpecial);
        }
        Ok(())
    }

    /// Verify a plaintext candidate against the stored hash.
    ///
    /// The hashing scheme is detected from the stored value. Blank candidates
    /// and unrecognized hashes verify as false.
    pub fn verify(&self, candidate: &str) -> bool {
        if candidate.trim().is_empty() {
            return false;
        }
        match self.algorithm() {
            Some(algorithm) => algorithm.hasher().verify(candidate, &self.hashed_value),
            None => {
                tracing::warn!("Stored password hash has an unrecognized scheme");
                false
            }
        }
    }

    /// Verify a plaintext candidate through an explicit hasher.
    pub fn verify_with(&self, candidate: &str, hasher: &dyn CredentialHasher) -> bool {
        if candidate.trim().is_empty() {
            return false;
        }
        hasher.verify(candidate, &self.hashed_value)
    }

    /// Get the encoded hash string.
    pub fn as_str(&self) -> &str {
        &self.hashed_value
    }

    /// Scheme the stored hash was produced with, if recognized.
    pub fn algorithm(&self) -> Option<HashAlgorithm> {
        HashAlgorithm::detect(&self.hashed_value)
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hashed_value == other.hashed_value
    }
}

impl Eq for Password {}

impl Hash for Password {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hashed_value.hash(state);
    }
}
