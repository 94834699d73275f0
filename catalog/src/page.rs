//! Page envelope returned by the `list` endpoints and the matching request.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use serde::{Deserialize, Serialize};

/// One page of a collection: `{ content, totalPages }`.
///
/// The backend sends more envelope fields (sort, pageable, ...); they are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { content: Vec::new(), total_pages: 0 }
    }
}

/// Zero-based page index and page size sent as `?page=&size=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Query string without the leading `?`.
    #[must_use]
    pub fn query(&self) -> String {
        format!("page={}&size={}", self.page, self.size)
    }
}
