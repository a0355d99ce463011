//! Route handlers
//!
//! - `auth`: login
//! - `accounts`: signup, current account, listing
//! - `attachments`: account photos
//! - `health`: liveness

pub mod accounts;
pub mod attachments;
pub mod auth;
pub mod health;
