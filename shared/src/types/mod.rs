//! Type definitions shared by the API and service layers
//!
//! - `pagination` - Offset pagination for list endpoints

pub mod pagination;

pub use pagination::{PaginatedResponse, Pagination};
