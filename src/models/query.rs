//! List query parameters.

use serde::{Deserialize, Serialize};

/// Options recognized by the paper listing endpoint.
///
/// `sort_by` and `order` are passed through verbatim and validated by the
/// server only; it currently accepts `created_at`, `title`, `published`,
/// `updated` and `arxiv_id` for `sort_by`, and `asc`/`desc` for `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Maximum number of papers per page (default 20)
    pub limit: usize,

    /// Number of papers to skip (default 0)
    pub offset: usize,

    /// Sort field, server-validated (default "created_at")
    pub sort_by: String,

    /// Sort direction, server-validated (default "desc")
    pub order: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            sort_by: "created_at".to_string(),
            order: "desc".to_string(),
        }
    }
}

impl ListQuery {
    /// Create a query with the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page offset
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Set the sort field
    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    /// Set the sort direction
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }
}
