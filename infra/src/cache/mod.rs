//! Cache module for Redis-based caching
//!
//! Provides the Redis client with retry logic and the token cache built
//! on top of it.

pub mod redis_client;
pub mod token_cache;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use token_cache::RedisTokenCache;

// Re-export commonly used types
pub use acct_shared::config::CacheConfig;
