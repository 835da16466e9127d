//! Navigation state for a paginated list.

use super::markers::{compute_visible_page_indices, PageMarker, DEFAULT_MAX_VISIBLE_PAGES};
use super::page::{clamp_page, PageWindow};

/// Pagination state owned by a list screen.
///
/// Requests outside `[1, total_pages]` are clamped, so the stored page is
/// always valid for the current dataset size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNav {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
    max_visible: usize,
}

impl PageNav {
    /// Create navigation state starting on page 1.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
            max_visible: DEFAULT_MAX_VISIBLE_PAGES,
        }
    }

    /// Override how many page numbers the bar shows before collapsing.
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Current page window.
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.current_page, self.items_per_page, self.total_items)
    }

    pub fn total_pages(&self) -> usize {
        self.window().total_pages()
    }

    /// Record a new dataset size, clamping the current page into range.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page =
            PageWindow::clamped(self.current_page, self.items_per_page, total_items).current_page;
    }

    /// Jump to `page`, clamped into range.
    ///
    /// Returns `true` if the current page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = clamp_page(page, self.total_pages());
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    /// Return to the first page.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// "Previous" control is enabled.
    pub fn can_go_previous(&self) -> bool {
        self.window().has_previous()
    }

    /// "Next" control is enabled.
    pub fn can_go_next(&self) -> bool {
        self.window().has_next()
    }

    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.go_to(self.current_page - 1)
    }

    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.go_to(self.current_page + 1)
    }

    /// Page numbers for the navigation bar.
    pub fn markers(&self) -> Vec<PageMarker> {
        compute_visible_page_indices(self.current_page, self.total_pages(), self.max_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_disable_controls() {
        let mut nav = PageNav::new(10);
        nav.set_total_items(47);

        assert!(!nav.can_go_previous());
        assert!(nav.can_go_next());
        assert!(!nav.previous());

        nav.go_to(5);
        assert!(nav.can_go_previous());
        assert!(!nav.can_go_next());
        assert!(!nav.next());
        assert_eq!(nav.current_page(), 5);
    }

    #[test]
    fn test_out_of_range_requests_are_clamped() {
        let mut nav = PageNav::new(10);
        nav.set_total_items(47);

        nav.go_to(99);
        assert_eq!(nav.current_page(), 5);

        nav.go_to(0);
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn test_shrinking_dataset_clamps_page() {
        let mut nav = PageNav::new(10);
        nav.set_total_items(47);
        nav.go_to(5);

        nav.set_total_items(12);
        assert_eq!(nav.current_page(), 2);

        nav.set_total_items(0);
        assert_eq!(nav.current_page(), 1);
        assert!(!nav.can_go_next());
    }

    #[test]
    fn test_zero_page_budget_lists_single_page_once() {
        let mut nav = PageNav::new(10).with_max_visible(0);
        nav.set_total_items(3);
        assert_eq!(nav.markers(), vec![PageMarker::Number(1)]);
    }

    #[test]
    fn test_go_to_reports_change() {
        let mut nav = PageNav::new(5);
        nav.set_total_items(20);
        assert!(nav.go_to(2));
        assert!(!nav.go_to(2));
    }
}
