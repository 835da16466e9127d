//! Pagination engine.
//!
//! Pure page-window math over in-memory lists:
//!
//! - [`PageWindow`] - one page of a larger ordered dataset
//! - [`paginate`] - slice a dataset for display
//! - [`compute_visible_page_indices`] - page-number list with ellipsis markers
//! - [`PageNav`] - clamped prev/next navigation for the page-rendering layer

mod markers;
mod nav;
mod page;

pub use markers::{compute_visible_page_indices, PageMarker, DEFAULT_MAX_VISIBLE_PAGES};
pub use nav::PageNav;
pub use page::{clamp_page, paginate, total_pages, PageWindow};
