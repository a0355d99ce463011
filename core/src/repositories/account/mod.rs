//! Account storage.

mod r#trait;
pub use r#trait::AccountRepository;

#[cfg(any(test, feature = "testing"))]
mod mock;
#[cfg(any(test, feature = "testing"))]
pub use mock::MockAccountRepository;

#[cfg(test)]
mod tests;
