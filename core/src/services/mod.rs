//! Business services containing domain logic and use cases.

pub mod account;
pub mod auth;
pub mod credentials;
pub mod token;

// Re-export commonly used types
pub use account::{AccountService, AccountServiceConfig, AttachmentStore};
pub use auth::AuthService;
pub use credentials::{CredentialValidator, ProviderVerdict, ProviderVerifier};
pub use token::{Authenticated, AuthenticatorConfig, Resolution, TokenAuthenticator};
