//! Page-window math and dataset slicing.

use std::ops::Range;

/// Compute the number of pages for `total_items` split into pages of `items_per_page`.
///
/// An `items_per_page` of zero is a caller contract violation; release builds
/// treat it as one item per page.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    debug_assert!(items_per_page > 0, "items_per_page must be at least 1");
    total_items.div_ceil(items_per_page.max(1))
}

/// Clamp a requested page into `[1, total_pages]`.
///
/// With zero pages the result is page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return the slice of `data` visible on `current_page`.
///
/// A page past the end yields an empty slice rather than an error.
pub fn paginate<T>(data: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    let range = PageWindow::new(current_page, items_per_page, data.len()).range();
    &data[range]
}

/// One page of a larger ordered dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number
    pub current_page: usize,
    /// Page size
    pub items_per_page: usize,
    /// Size of the whole dataset
    pub total_items: usize,
}

impl PageWindow {
    /// Create a window without clamping the page.
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        debug_assert!(items_per_page > 0, "items_per_page must be at least 1");
        Self {
            current_page: current_page.max(1),
            items_per_page: items_per_page.max(1),
            total_items,
        }
    }

    /// Create a window with the page clamped into `[1, total_pages]`.
    pub fn clamped(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        let mut window = Self::new(current_page, items_per_page, total_items);
        window.current_page = clamp_page(window.current_page, window.total_pages());
        window
    }

    /// Number of pages in the dataset.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Half-open item range visible on this page, intersected with the dataset.
    pub fn range(&self) -> Range<usize> {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page);
        let end = start.saturating_add(self.items_per_page).min(self.total_items);
        start.min(self.total_items)..end
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }
}
