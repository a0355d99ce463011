//! Password hashing

use crate::errors::{DomainError, DomainResult};

/// Work factor for stored password hashes
pub const BCRYPT_COST: u32 = 10;

/// Hashes a password for storage
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
}

/// Compares a password against a stored hash.
///
/// A malformed hash is an error, never a match.
pub fn verify_password(password: &str, hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))
}
