//! Domain-level constants.
//!
//! These constants define the credential policy and hashing defaults.

// =============================================================================
// Password policy
// =============================================================================

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Check if a character belongs to the special-character set
pub fn is_special_character(c: char) -> bool {
    PASSWORD_SPECIAL_CHARACTERS.contains(c)
}

// =============================================================================
// Hashing
// =============================================================================

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Version prefix shared by all bcrypt hashes
pub const BCRYPT_PREFIX: &str = "$2";

/// Length of an encoded bcrypt hash
pub const BCRYPT_HASH_LENGTH: usize = 60;

/// PHC identifier prefix for Argon2 hashes
pub const ARGON2_PREFIX: &str = "$argon2";

// =============================================================================
// Account
// =============================================================================

/// Field names reported in account argument errors
pub const FIELD_ACCOUNT_ID: &str = "account_id";
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_NEW_PASSWORD: &str = "new_password";
