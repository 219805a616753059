//! Pagination utilities for AgileZen list responses.

use serde::{Deserialize, Serialize};

/// Default page size for list operations.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// A page of results as returned by AgileZen collection endpoints.
///
/// ```json
/// {"page": 1, "pageSize": 100, "totalPages": 1, "totalItems": 2, "items": [...]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Current page number (1-indexed).
    #[serde(default = "first_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Total number of pages (if reported).
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Total number of items across all pages (if reported).
    #[serde(default)]
    pub total_items: Option<u64>,
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

fn first_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl<T> Page<T> {
    /// Whether more pages follow this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        match (self.total_pages, self.total_items) {
            (Some(pages), _) => self.page < pages,
            (None, Some(total)) => u64::from(self.page) * u64::from(self.page_size) < total,
            (None, None) => self.is_full(),
        }
    }

    /// Whether this page is full, meaning a single-page read may be truncated.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.page_size > 0 && self.items.len() >= self.page_size as usize
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Query parameters for paginated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::for_page(1, DEFAULT_PAGE_SIZE)
    }
}

impl PaginationParams {
    /// Create pagination params for a specific page.
    #[must_use]
    pub fn for_page(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Query pairs as sent on the wire.
    pub fn to_query(self) -> [(&'static str, u32); 2] {
        [("page", self.page), ("pageSize", self.page_size)]
    }
}
