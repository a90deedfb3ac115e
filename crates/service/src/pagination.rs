//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` request, helpers to normalize inputs, and the
//! `Paginated` page returned by listing operations.

use serde::{Deserialize, Serialize};

/// Largest page size a caller may request.
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self { Self { page, per_page } }

    /// Clamp to sane defaults and convert to `u64`: (0-based page index, page size)
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        ((page - 1) as u64, per_page as u64)
    }

    /// Number of rows skipped before this page.
    pub fn offset(self) -> u64 {
        let (idx, per) = self.normalize();
        idx * per
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}

/// One page of results plus the totals needed to render page links.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// normalized 1-based page
    pub page: u32,
    /// normalized page size
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, request: Pagination, total_items: u64) -> Self {
        let (idx, per) = request.normalize();
        Self {
            items,
            page: idx as u32 + 1,
            per_page: per as u32,
            total_items,
            total_pages: total_items.div_ceil(per),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Paginated, Pagination};

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, 100);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 20);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 10).offset(), 20);
        assert_eq!(Pagination::new(0, 10).offset(), 0);
    }

    #[test]
    fn page_totals_round_up() {
        let p: Paginated<u8> = Paginated::new(vec![1, 2], Pagination::new(3, 2), 5);
        assert_eq!(p.page, 3);
        assert_eq!(p.per_page, 2);
        assert_eq!(p.total_pages, 3);

        let empty: Paginated<u8> = Paginated::new(vec![], Pagination::new(0, 0), 0);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.per_page, 1);
        assert_eq!(empty.total_pages, 0);
    }
}
