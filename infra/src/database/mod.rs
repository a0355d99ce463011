//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - Token, credential and account repositories
//! - Schema migrations

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlAccountRepository, MySqlCredentialRepository, MySqlTokenRepository};
