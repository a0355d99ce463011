//! Credential storage.

mod r#trait;
pub use r#trait::CredentialRepository;

#[cfg(any(test, feature = "testing"))]
mod mock;
#[cfg(any(test, feature = "testing"))]
pub use mock::MockCredentialRepository;
