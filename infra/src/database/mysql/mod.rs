//! MySQL repository implementations

mod account_repository_impl;
mod credential_repository_impl;
mod token_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use credential_repository_impl::MySqlCredentialRepository;
pub use token_repository_impl::MySqlTokenRepository;

pub(crate) use account_repository_impl::photo_from_columns;
pub(crate) use credential_repository_impl::{credential_columns, stored_credential_from_columns};

use acct_core::errors::DomainError;

/// Map a SQLx error to an internal domain error with context
pub(crate) fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}
