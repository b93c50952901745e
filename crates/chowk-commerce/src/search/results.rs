//! Pagination and the result envelope.

use crate::catalog::Record;
use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub limit: usize,
    /// Total number of matching items across all pages.
    pub total: usize,
    /// Total number of pages (`ceil(total / limit)`).
    pub pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. Pages ≤ 0 are the caller's concern; this
    /// type assumes `page >= 1` and `limit >= 1`.
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        Self {
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
            has_next: page * limit < total,
            has_prev: page > 1,
        }
    }
}

/// Slice an ordered sequence into the requested page.
///
/// `page` values below 1 are clamped to 1. A page past the end yields an
/// empty slice, not an error. `limit` must be at least 1; callers clamp
/// raw input before reaching here. Whether the caller replaces its
/// current view with the slice or appends it (infinite scroll) is the
/// caller's decision; this always returns exactly the page's slice.
pub fn paginate<T>(items: Vec<T>, page: usize, limit: usize) -> (Vec<T>, Pagination) {
    debug_assert!(limit >= 1, "limit must be clamped to >= 1 by the caller");
    let page = page.max(1);
    let total = items.len();
    let slice: Vec<T> = items
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();
    (slice, Pagination::new(page, limit, total))
}

/// The `{ data, pagination }` envelope a query produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryOutcome {
    /// The requested page of records.
    pub data: Vec<Record>,
    /// Continuation metadata.
    pub pagination: Pagination,
}

impl QueryOutcome {
    /// An outcome with no matches.
    pub fn empty(page: usize, limit: usize) -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination::new(page.max(1), limit.max(1), 0),
        }
    }
}
