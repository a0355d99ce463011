//! Credential validation
//!
//! Matches submitted credentials against stored records: bcrypt hashes for
//! passwords, external verification plus stored identity for providers.

mod password;
mod traits;
mod validator;

#[cfg(any(test, feature = "testing"))]
mod mock;

#[cfg(test)]
mod tests;

pub use password::{hash_password, verify_password, BCRYPT_COST};
pub use traits::{ProviderVerdict, ProviderVerifier};
pub use validator::CredentialValidator;

#[cfg(any(test, feature = "testing"))]
pub use mock::MockProviderVerifier;
