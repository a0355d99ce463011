pub mod account;
pub mod credential;
pub mod token;
pub mod token_cache;

pub use account::AccountRepository;
pub use credential::CredentialRepository;
pub use token::TokenRepository;
pub use token_cache::{CacheLookup, TokenCache};

#[cfg(any(test, feature = "testing"))]
pub use account::MockAccountRepository;
#[cfg(any(test, feature = "testing"))]
pub use credential::MockCredentialRepository;
#[cfg(any(test, feature = "testing"))]
pub use token::MockTokenRepository;
#[cfg(any(test, feature = "testing"))]
pub use token_cache::MockTokenCache;
