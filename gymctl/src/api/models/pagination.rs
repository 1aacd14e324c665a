//! Shared pagination types for API query parameters.
//!
//! Admin list endpoints use page-based pagination (`page` starting at 1 and
//! `page_size`), and responses carry the totals the dashboard needs to render
//! a pager.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use utoipa::{IntoParams, ToSchema};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 25;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Standard pagination parameters for list endpoints.
///
/// `page` is 1-based. `page_size` is clamped to `1..=MAX_PAGE_SIZE`, which
/// prevents both zero-result queries and unbounded fetches.
// DisplayFromStr: these arrive through a #[serde(flatten)] into query-string
// deserialization, where every value is a string.
#[serde_as]
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct Pagination {
    /// Page number, starting at 1 (default: 1)
    #[param(default = 1, minimum = 1)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page: Option<i64>,

    /// Items per page (default: 25, max: 100)
    #[param(default = 25, minimum = 1, maximum = 100)]
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page_size: Option<i64>,
}

impl Pagination {
    /// The page number, defaulting to the first page.
    #[inline]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// The page size, clamped between 1 and [`MAX_PAGE_SIZE`].
    #[inline]
    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Row offset for the current page.
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.page_size()
    }
}

/// Page envelope returned by list endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Total rows matching the filter, across all pages
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, pagination: &Pagination) -> Self {
        let page_size = pagination.page_size();
        Self {
            items,
            total,
            page: pagination.page(),
            page_size,
            total_pages: (total as u64).div_ceil(page_size as u64) as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped() {
        let p = Pagination { page: Some(0), page_size: Some(1000) };
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), MAX_PAGE_SIZE);

        let p = Pagination { page: None, page_size: None };
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn offset_and_total_pages_follow_the_page_math() {
        let p = Pagination { page: Some(3), page_size: Some(10) };
        assert_eq!(p.offset(), 20);

        let page = Paginated::new(vec![1, 2, 3], 31, &p);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.page, 3);

        let empty: Paginated<i32> = Paginated::new(vec![], 0, &p);
        assert_eq!(empty.total_pages, 0);
    }
}
