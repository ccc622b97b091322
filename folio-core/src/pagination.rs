//! Numbered pagination for static listing pages (`/blog/page/2`).

use serde::Serialize;

/// Default items per page
const DEFAULT_PER_PAGE: usize = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: usize,
    /// Items per page
    pub per_page: usize,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to minimum of 1
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Index of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// One page of a listing
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: usize,
    /// Current page number
    pub page: usize,
    /// Items per page
    pub per_page: usize,
}

impl<T> Page<T> {
    /// Calculate total number of pages.
    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.per_page).max(1)
        }
    }

    /// Check if there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Check if there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Link to the previous page; page 1 is the bare listing path.
    pub fn prev_href(&self, base: &str) -> Option<String> {
        if !self.has_prev() {
            return None;
        }
        Some(page_href(base, self.page - 1))
    }

    /// Link to the next page
    pub fn next_href(&self, base: &str) -> Option<String> {
        if !self.has_next() {
            return None;
        }
        Some(page_href(base, self.page + 1))
    }
}

fn page_href(base: &str, page: usize) -> String {
    let base = base.trim_matches('/');
    if page == 1 {
        format!("/{}/", base)
    } else {
        format!("/{}/page/{}", base, page)
    }
}

/// Slice `items` into the requested page.
pub fn paginate<T: Clone>(items: &[T], pagination: Pagination) -> Page<T> {
    let start = pagination.offset().min(items.len());
    let end = (start + pagination.per_page).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        total: items.len(),
        page: pagination.page,
        per_page: pagination.per_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(total: usize, page: usize, per_page: usize) -> Page<()> {
        Page {
            items: vec![],
            total,
            page,
            per_page,
        }
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(3, 6).offset(), 12);
    }

    #[test]
    fn clamps_page_and_per_page() {
        let p = Pagination::new(0, 0);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 1);
    }

    #[test]
    fn total_pages() {
        assert_eq!(page(0, 1, 10).total_pages(), 1);
        assert_eq!(page(25, 1, 10).total_pages(), 3);
        assert_eq!(page(30, 1, 10).total_pages(), 3);
    }

    #[test]
    fn prev_and_next_links() {
        let first = page(30, 1, 10);
        assert_eq!(first.prev_href("blog"), None);
        assert_eq!(first.next_href("blog").as_deref(), Some("/blog/page/2"));

        let second = page(30, 2, 10);
        assert_eq!(second.prev_href("/blog/").as_deref(), Some("/blog/"));
        assert_eq!(second.next_href("blog").as_deref(), Some("/blog/page/3"));

        let last = page(30, 3, 10);
        assert!(last.has_prev());
        assert_eq!(last.next_href("blog"), None);
    }

    #[test]
    fn paginate_slices_and_handles_overflow() {
        let items: Vec<u32> = (0..25).collect();

        let p = paginate(&items, Pagination::new(3, 10));
        assert_eq!(p.items, vec![20, 21, 22, 23, 24]);
        assert_eq!(p.total_pages(), 3);

        let beyond = paginate(&items, Pagination::new(9, 10));
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_next());
    }
}
