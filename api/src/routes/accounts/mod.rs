//! Account route handlers

pub mod list;
pub mod me;
pub mod signup;

pub use list::list_accounts;
pub use me::me;
pub use signup::signup;
