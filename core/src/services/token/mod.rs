//! Bearer token authentication
//!
//! Resolves a raw request token to an account through the token cache,
//! falling back to the token store, and rotates tokens close to expiry.

mod authenticator;
mod config;

#[cfg(test)]
mod tests;

pub use authenticator::{parse_auth_header, Authenticated, Resolution, TokenAuthenticator};
pub use config::AuthenticatorConfig;
