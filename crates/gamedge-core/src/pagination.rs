//! Offset/limit pagination.

use serde::{Deserialize, Serialize};

/// Describes which page of a query to return.
///
/// Data stores receive this as-is; only the query implementation decides how
/// the offset and limit are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of results to skip.
    pub offset: u32,
    /// Maximum number of results to return.
    pub limit: u32,
}

impl Pagination {
    /// Default page size.
    pub const DEFAULT_LIMIT: u32 = 20;

    /// Create a new pagination descriptor.
    #[must_use]
    pub const fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// The descriptor for the page following this one.
    #[must_use]
    pub const fn next_page(self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            limit: self.limit,
        }
    }

    /// Apply this page to an already ordered sequence.
    pub fn apply<I: IntoIterator>(self, items: I) -> impl Iterator<Item = I::Item> {
        items
            .into_iter()
            .skip(self.offset as usize)
            .take(self.limit as usize)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_first_page() {
        let page = Pagination::default();
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, 20);
    }

    #[test]
    fn next_page_advances_offset() {
        let page = Pagination::new(0, 10).next_page().next_page();
        assert_eq!(page, Pagination::new(20, 10));
    }

    #[test]
    fn apply_skips_and_takes() {
        let page: Vec<_> = Pagination::new(2, 3).apply(0..10).collect();
        assert_eq!(page, vec![2, 3, 4]);

        let past_end: Vec<_> = Pagination::new(20, 3).apply(0..10).collect();
        assert!(past_end.is_empty());
    }
}
