//! # Account API
//!
//! actix-web surface of the account backend: login, signup, the current
//! account, attachments and the administrative listing, guarded by the
//! token and cookie authentication middlewares.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState, Ports};
pub use config::Config;
