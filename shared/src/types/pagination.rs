//! Offset-based pagination for list endpoints

use serde::{Deserialize, Serialize};

/// Smallest accepted page size
pub const MIN_LIMIT: u32 = 1;

/// Largest accepted page size
pub const MAX_LIMIT: u32 = 100;

/// Page size used when the client does not send one
pub const DEFAULT_LIMIT: u32 = 20;

/// Offset/limit window over an ordered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of items to skip
    #[serde(default)]
    pub offset: u32,

    /// Number of items to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Create a window, clamping the limit into the accepted range
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset,
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }
}

/// One page of results together with the window that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The items in this page
    pub data: Vec<T>,

    /// Offset the page starts at
    pub offset: u32,

    /// Requested page size
    pub limit: u32,

    /// Number of items actually returned
    pub count: usize,
}

impl<T> PaginatedResponse<T> {
    /// Wrap a page of items
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        let count = data.len();
        Self {
            data,
            offset: pagination.offset,
            limit: pagination.limit,
            count,
        }
    }
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_clamped() {
        assert_eq!(Pagination::new(0, 0).limit, MIN_LIMIT);
        assert_eq!(Pagination::new(0, 500).limit, MAX_LIMIT);
        assert_eq!(Pagination::new(40, 20).offset, 40);
    }

    #[test]
    fn test_paginated_response_counts_items() {
        let page = PaginatedResponse::new(vec![1, 2, 3], Pagination::new(10, 20));
        assert_eq!(page.count, 3);
        assert_eq!(page.offset, 10);
        assert_eq!(page.limit, 20);
    }
}
