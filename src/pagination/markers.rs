//! Page-number lists for navigation bars.

/// Default number of page buttons shown before ellipsis markers kick in.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// One entry in a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A clickable 1-based page number
    Number(usize),
    /// A gap between non-adjacent page numbers
    Ellipsis,
}

impl PageMarker {
    /// Page number, if this marker is not an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Number(page) => Some(*page),
            PageMarker::Ellipsis => None,
        }
    }
}

/// Build the page-number list for a navigation bar.
///
/// When every page fits, all pages are listed. Otherwise the first and last
/// pages are always present, with a window of `current_page ± 1` between them
/// and an ellipsis wherever that window does not touch the ends.
pub fn compute_visible_page_indices(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Vec<PageMarker> {
    // a single page is always listed alone, whatever the budget
    if total_pages <= max_visible.max(1) {
        return (1..=total_pages).map(PageMarker::Number).collect();
    }

    let current_page = current_page.clamp(1, total_pages);
    let window_start = current_page.saturating_sub(1).max(2);
    let window_end = (current_page + 1).min(total_pages - 1);

    let mut markers = Vec::with_capacity(7);
    markers.push(PageMarker::Number(1));

    if window_start > 2 {
        markers.push(PageMarker::Ellipsis);
    }

    markers.extend((window_start..=window_end).map(PageMarker::Number));

    if window_end < total_pages - 1 {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Number(total_pages));
    markers
}
