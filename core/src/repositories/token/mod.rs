//! Durable token storage.

mod r#trait;
pub use r#trait::TokenRepository;

#[cfg(any(test, feature = "testing"))]
mod mock;
#[cfg(any(test, feature = "testing"))]
pub use mock::MockTokenRepository;

#[cfg(test)]
mod tests;
