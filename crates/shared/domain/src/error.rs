//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rule of the password policy.
///
/// Rules are checked in declaration order and the first one that fails is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    Empty,
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

impl PasswordRule {
    /// All rules, in evaluation order
    pub const ALL: [PasswordRule; 6] = [
        PasswordRule::Empty,
        PasswordRule::TooShort,
        PasswordRule::MissingUppercase,
        PasswordRule::MissingLowercase,
        PasswordRule::MissingDigit,
        PasswordRule::MissingSpecial,
    ];

    /// Human-readable description of the violated rule
    pub fn message(&self) -> &'static str {
        match self {
            PasswordRule::Empty => "Password must not be empty",
            PasswordRule::TooShort => "Password length must be at least 8 characters",
            PasswordRule::MissingUppercase => {
                "Password must contain at least one uppercase letter"
            }
            PasswordRule::MissingLowercase => {
                "Password must contain at least one lowercase letter"
            }
            PasswordRule::MissingDigit => "Password must contain at least one digit",
            PasswordRule::MissingSpecial => {
                "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)"
            }
        }
    }
}

impl std::fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Plaintext credential rejected by the password policy
    #[error("Invalid credential: {0}")]
    InvalidCredential(PasswordRule),

    /// Structural precondition violated
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// Required argument was not supplied
    #[error("Missing argument `{field}`")]
    MissingArgument { field: &'static str },

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create an invalid argument error
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Create a missing argument error
    pub fn missing_argument(field: &'static str) -> Self {
        DomainError::MissingArgument { field }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }

    /// True for both the invalid and the missing argument variants
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidArgument { .. } | DomainError::MissingArgument { .. }
        )
    }

    /// The failed password rule, if this is a credential error
    pub fn password_rule(&self) -> Option<PasswordRule> {
        match self {
            DomainError::InvalidCredential(rule) => Some(*rule),
            _ => None,
        }
    }
}

impl From<PasswordRule> for DomainError {
    fn from(rule: PasswordRule) -> Self {
        DomainError::InvalidCredential(rule)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
