//! Fast, non-authoritative token lookup.

mod r#trait;
pub use r#trait::{CacheLookup, TokenCache};

#[cfg(any(test, feature = "testing"))]
mod mock;
#[cfg(any(test, feature = "testing"))]
pub use mock::MockTokenCache;

#[cfg(test)]
mod tests;
