//! Account lifecycle: signup, profile lookup, photo attachment and
//! administrative listing.

mod config;
mod service;
mod traits;

#[cfg(any(test, feature = "testing"))]
mod mock;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use service::AccountService;
pub use traits::AttachmentStore;

#[cfg(any(test, feature = "testing"))]
pub use mock::MockAttachmentStore;
