//! Identity provider verification
//!
//! - `facebook`: Graph API token check
//! - `registry`: dispatch by provider name

pub mod facebook;
pub mod registry;


pub use facebook::FacebookVerifier;
pub use registry::ProviderRegistry;
