//! Account aggregate root and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{FIELD_ACCOUNT_ID, FIELD_NEW_PASSWORD, FIELD_PASSWORD, FIELD_USERNAME};
use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// Account identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a fresh random identifier
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// The nil identifier, never accepted by [`Account::new`]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AccountId> for Uuid {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rental-car customer account.
///
/// Owns exactly one [`Password`] and mediates all access to it.
#[derive(Debug, Clone)]
pub struct Account {
    account_id: AccountId,
    username: String,
    password: Password,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account stamped with the current UTC time.
    ///
    /// # Errors
    /// Returns an argument error if the id is nil, the username is blank, or
    /// no password is supplied.
    pub fn new(
        account_id: AccountId,
        username: impl Into<String>,
        password: Option<Password>,
    ) -> DomainResult<Self> {
        if account_id.is_nil() {
            return Err(DomainError::invalid_argument(
                FIELD_ACCOUNT_ID,
                "Account ID must not be empty",
            ));
        }

        let username = username.into();
        if username.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                FIELD_USERNAME,
                "Username must not be empty",
            ));
        }

        let password = password.ok_or_else(|| DomainError::missing_argument(FIELD_PASSWORD))?;

        tracing::debug!(account_id = %account_id, "Account created");
        Ok(Self {
            account_id,
            username,
            password,
            created_at: Utc::now(),
        })
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Verify a plaintext candidate against the account's password
    pub fn verify_password(&self, plaintext: &str) -> bool {
        self.password.verify(plaintext)
    }

    /// Replace the account's password. No history is kept.
    pub fn change_password(&mut self, new_password: Option<Password>) -> DomainResult<()> {
        let new_password =
            new_password.ok_or_else(|| DomainError::missing_argument(FIELD_NEW_PASSWORD))?;
        self.password = new_password;
        tracing::debug!(account_id = %self.account_id, "Account password changed");
        Ok(())
    }
}

/// Account projection without credentials (safe to hand out)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account_id: AccountId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.account_id,
            username: account.username.clone(),
            created_at: account.created_at,
        }
    }
}

impl From<Account> for AccountSummary {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id,
            username: account.username,
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_BCRYPT_COST;
    use crate::hasher::BcryptHasher;
    use rstest::rstest;

    fn password(plaintext: &str) -> Password {
        let hasher = BcryptHasher::new(MIN_BCRYPT_COST).unwrap();
        Password::create_with(plaintext, &hasher).unwrap()
    }

    #[test]
    fn test_new_account() {
        let before = Utc::now();
        let id = AccountId::new_v4();
        let account = Account::new(id, "alice", Some(password("Test@1234"))).unwrap();
        let after = Utc::now();

        assert_eq!(account.account_id(), id);
        assert_eq!(account.username(), "alice");
        assert!(account.created_at() >= before && account.created_at() <= after);
    }

    #[test]
    fn test_nil_id_rejected() {
        let err = Account::new(AccountId::nil(), "alice", Some(password("Test@1234"))).unwrap_err();

        assert!(matches!(
            err,
            DomainError::InvalidArgument { field: FIELD_ACCOUNT_ID, .. }
        ));
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case("\t")]
    fn test_blank_username_rejected(#[case] username: &str) {
        let err = Account::new(AccountId::new_v4(), username, Some(password("Test@1234")))
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::InvalidArgument { field: FIELD_USERNAME, .. }
        ));
    }

    #[test]
    fn test_missing_password_rejected() {
        let err = Account::new(AccountId::new_v4(), "alice", None).unwrap_err();

        assert_eq!(err, DomainError::missing_argument(FIELD_PASSWORD));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_verify_password_delegates() {
        let account = Account::new(AccountId::new_v4(), "alice", Some(password("Test@1234"))).unwrap();

        assert!(account.verify_password("Test@1234"));
        assert!(!account.verify_password("Other@1234"));
        assert!(!account.verify_password(""));
    }

    #[test]
    fn test_change_password() {
        let mut account =
            Account::new(AccountId::new_v4(), "alice", Some(password("Test@1234"))).unwrap();
        let replacement = password("Next@5678");

        account.change_password(Some(replacement.clone())).unwrap();

        assert_eq!(account.password(), &replacement);
        assert!(account.verify_password("Next@5678"));
        assert!(!account.verify_password("Test@1234"));
    }

    #[test]
    fn test_change_password_requires_value() {
        let mut account =
            Account::new(AccountId::new_v4(), "alice", Some(password("Test@1234"))).unwrap();
        let original = account.password().clone();

        let err = account.change_password(None).unwrap_err();

        assert_eq!(err, DomainError::missing_argument(FIELD_NEW_PASSWORD));
        assert_eq!(account.password(), &original);
    }

    #[test]
    fn test_summary_omits_credentials() {
        let account = Account::new(AccountId::new_v4(), "alice", Some(password("Test@1234"))).unwrap();
        let summary = AccountSummary::from(&account);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["username"], "alice");
        assert_eq!(json["account_id"], account.account_id().to_string());
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_summary_from_owned_account() {
        let account = Account::new(AccountId::new_v4(), "alice", Some(password("Test@1234"))).unwrap();
        let (id, created_at) = (account.account_id(), account.created_at());

        let summary = AccountSummary::from(account);

        assert_eq!(summary.account_id, id);
        assert_eq!(summary.username, "alice");
        assert_eq!(summary.created_at, created_at);
    }
}
