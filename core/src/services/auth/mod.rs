//! Login: exchanges credentials for a fresh token.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
