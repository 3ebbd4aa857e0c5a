//! 1-indexed pagination over already filtered and sorted results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One page of a list query.
///
/// `total` and `total_pages` describe the whole filtered result, so they stay
/// correct even when `current_page` is past the end and `items` is empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl<T> Page<T> {
    /// Slice `items` down to the requested page.
    ///
    /// `page` 0 is treated as page 1. `page_size` must be non-zero; callers
    /// resolve a zero size to their collection default first.
    #[must_use]
    pub fn from_items(items: Vec<T>, page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total = items.len();
        let total_pages = total.div_ceil(page_size);
        let start = (page - 1).saturating_mul(page_size);
        let items = items.into_iter().skip(start).take(page_size).collect();

        Self {
            items,
            total,
            total_pages,
            current_page: page,
        }
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Transform the items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            total_pages: self.total_pages,
            current_page: self.current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Page;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, 6, vec![1, 2, 3, 4, 5, 6])]
    #[case(2, 6, vec![7, 8, 9, 10])]
    #[case(3, 6, vec![])]
    #[case(0, 4, vec![1, 2, 3, 4])]
    fn slices_expected_window(
        #[case] page: usize,
        #[case] size: usize,
        #[case] expected: Vec<u32>,
    ) {
        let items: Vec<u32> = (1..=10).collect();
        let result = Page::from_items(items, page, size);
        assert_eq!(result.items, expected);
        assert_eq!(result.total, 10);
        assert_eq!(result.total_pages, 10_usize.div_ceil(size));
    }

    #[test]
    fn page_past_end_keeps_totals() {
        let items: Vec<u32> = (1..=6).collect();
        let page = Page::from_items(items, 2, 9);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 6);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 2);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn empty_input_has_zero_pages() {
        let page = Page::<u32>::from_items(Vec::new(), 1, 6);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn serializes_camel_case() {
        let page = Page::from_items(vec!["a"], 1, 6);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["currentPage"], 1);
    }
}
