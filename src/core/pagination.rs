//! Pagination state and paginated responses

use crate::core::error::QueryError;
use serde::Serialize;
use std::ops::Range;

/// Paginated response structure
///
/// Wraps one page of rows with metadata about the pagination state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResponse<T> {
    /// The rows of the current page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Clone> PaginatedResponse<&T> {
    /// Detach the page from the store it borrows from
    pub fn cloned(self) -> PaginatedResponse<T> {
        self.map(T::clone)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1, clamped to `total_pages`)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages, at least 1 even with no items
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Compute pagination state for `total` matched items
    ///
    /// `requested_page` is clamped into `[1, total_pages]`, so asking for
    /// page 99 of a one-page result yields page 1. A zero page or limit is a
    /// caller contract violation.
    pub fn new(requested_page: usize, limit: usize, total: usize) -> Result<Self, QueryError> {
        if limit == 0 {
            return Err(QueryError::invalid_query("page_size", "must be at least 1"));
        }
        if requested_page == 0 {
            return Err(QueryError::invalid_query("page", "must be at least 1"));
        }

        let total_pages = total.div_ceil(limit).max(1);
        let page = requested_page.min(total_pages);

        Ok(Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        })
    }

    /// Index range of the current page within the matched sequence
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.limit).min(self.total);
        let end = (start + self.limit).min(self.total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(1, 20, 145).unwrap();
        assert_eq!(meta.total, 145);
        assert_eq!(meta.total_pages, 8);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
        assert_eq!(meta.range(), 0..20);
    }

    #[test]
    fn test_last_page_is_partial() {
        let meta = PaginationMeta::new(8, 20, 145).unwrap();
        assert_eq!(meta.range(), 140..145);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let meta = PaginationMeta::new(1, 10, 0).unwrap();
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.range(), 0..0);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_page_is_clamped() {
        let meta = PaginationMeta::new(99, 10, 3).unwrap();
        assert_eq!(meta.page, 1);
        assert_eq!(meta.range(), 0..3);

        let meta = PaginationMeta::new(7, 2, 5).unwrap();
        assert_eq!(meta.page, 3);
        assert_eq!(meta.range(), 4..5);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let err = PaginationMeta::new(1, 0, 10).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_QUERY");
    }

    #[test]
    fn test_zero_page_is_rejected() {
        assert!(PaginationMeta::new(0, 10, 10).is_err());
    }

    #[test]
    fn test_response_map_and_cloned() {
        let rows = vec!["a".to_string(), "b".to_string()];
        let response = PaginatedResponse {
            data: rows.iter().collect::<Vec<_>>(),
            pagination: PaginationMeta::new(1, 10, 2).unwrap(),
        };

        let owned = response.cloned();
        assert_eq!(owned.data, rows);
        assert_eq!(owned.map(|s| s.len()).data, vec![1, 1]);
    }
}
