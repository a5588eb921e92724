//! Shared configuration structures.

use std::env;

use domain::{BcryptHasher, CredentialHasher, HashAlgorithm, DEFAULT_BCRYPT_COST};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Environment variable selecting the hashing scheme
pub const ENV_HASH_ALGORITHM: &str = "PASSWORD_HASH_ALGORITHM";

/// Environment variable holding the bcrypt work factor
pub const ENV_BCRYPT_COST: &str = "PASSWORD_BCRYPT_COST";

/// Password hashing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HashingConfig {
    /// Scheme used for newly created passwords
    pub algorithm: HashAlgorithm,
    /// bcrypt work factor (4..=31)
    pub bcrypt_cost: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Bcrypt,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl HashingConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional wiring for callers that want the hasher chosen at deploy
    /// time; the domain types never read the environment themselves.
    /// Invalid values fall back to the defaults with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let algorithm = match lookup(ENV_HASH_ALGORITHM) {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %value,
                    "{} is not a known algorithm, using {}",
                    ENV_HASH_ALGORITHM,
                    defaults.algorithm
                );
                defaults.algorithm
            }),
            None => defaults.algorithm,
        };

        let bcrypt_cost = match lookup(ENV_BCRYPT_COST) {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(cost) if BcryptHasher::new(cost).is_ok() => cost,
                _ => {
                    tracing::warn!(
                        value = %value,
                        "{} is not a valid bcrypt cost, using {}",
                        ENV_BCRYPT_COST,
                        defaults.bcrypt_cost
                    );
                    defaults.bcrypt_cost
                }
            },
            None => defaults.bcrypt_cost,
        };

        Self {
            algorithm,
            bcrypt_cost,
        }
    }

    /// Construct the hasher described by this configuration.
    ///
    /// # Errors
    /// Returns a validation error if the bcrypt cost is out of range.
    pub fn build_hasher(&self) -> AppResult<Box<dyn CredentialHasher>> {
        match self.algorithm {
            HashAlgorithm::Bcrypt => Ok(Box::new(BcryptHasher::new(self.bcrypt_cost)?)),
            HashAlgorithm::Argon2 => Ok(HashAlgorithm::Argon2.hasher()),
        }
    }
}
