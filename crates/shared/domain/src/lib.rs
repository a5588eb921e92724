//! Domain layer - Rental-car account aggregate and password value object.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Credential hashing is consumed through the [`CredentialHasher`] trait.

pub mod account;
pub mod constants;
pub mod error;
pub mod hasher;
pub mod password;

pub use account::{Account, AccountId, AccountSummary};
pub use constants::*;
pub use error::{DomainError, DomainResult, PasswordRule};
pub use hasher::{Argon2Hasher, BcryptHasher, CredentialHasher, HashAlgorithm};
pub use password::Password;

#[cfg(any(test, feature = "test-utils"))]
pub use hasher::MockCredentialHasher;
