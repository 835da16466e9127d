//! Searchable, sortable, paginated listings.

mod sort;

pub use sort::SortOrder;

use tracing::debug;

use crate::models::Listing;
use crate::pagination::{paginate, PageMarker, PageNav};

/// One listing screen's data: the fetched records plus search, sort and
/// page state.
///
/// The filtered view is recomputed whenever the dataset, query or sort
/// changes; page navigation works on the filtered view.
#[derive(Debug, Clone)]
pub struct Catalog<T: Listing> {
    items: Vec<T>,
    filtered: Vec<usize>,
    query: String,
    sort: SortOrder,
    nav: PageNav,
}

impl<T: Listing> Catalog<T> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            sort: SortOrder::default(),
            nav: PageNav::new(items_per_page),
        }
    }

    /// Override the number of page links shown before collapsing.
    pub fn with_max_visible_pages(mut self, max_visible: usize) -> Self {
        self.nav = self.nav.with_max_visible(max_visible);
        self
    }

    /// Replace the dataset, keeping query and sort. The page is clamped.
    pub fn set_items(&mut self, items: Vec<T>) {
        debug!(collection = T::COLLECTION, count = items.len(), "catalog items replaced");
        self.items = items;
        self.refilter();
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Set the search query and go back to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.query {
            return;
        }
        self.query = query;
        self.nav.reset();
        self.refilter();
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Change the sort order and go back to page 1.
    pub fn set_sort(&mut self, sort: SortOrder) {
        if sort == self.sort {
            return;
        }
        self.sort = sort;
        self.nav.reset();
        self.refilter();
    }

    /// Advance to the next sort order.
    pub fn cycle_sort(&mut self) -> SortOrder {
        self.set_sort(self.sort.next());
        self.sort
    }

    /// Number of records matching the query.
    pub fn match_count(&self) -> usize {
        self.filtered.len()
    }

    /// Records on the current page.
    pub fn visible(&self) -> Vec<&T> {
        paginate(
            &self.filtered,
            self.nav.current_page(),
            self.nav.items_per_page(),
        )
        .iter()
        .map(|&index| &self.items[index])
        .collect()
    }

    /// The `offset`-th record on the current page.
    pub fn visible_at(&self, offset: usize) -> Option<&T> {
        let start = self.nav.window().range().start;
        self.filtered
            .get(start + offset)
            .filter(|_| offset < self.nav.items_per_page())
            .map(|&index| &self.items[index])
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn nav(&self) -> &PageNav {
        &self.nav
    }

    pub fn current_page(&self) -> usize {
        self.nav.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.nav.total_pages()
    }

    pub fn markers(&self) -> Vec<PageMarker> {
        self.nav.markers()
    }

    pub fn next_page(&mut self) -> bool {
        self.nav.next()
    }

    pub fn previous_page(&mut self) -> bool {
        self.nav.previous()
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.nav.go_to(page)
    }

    fn refilter(&mut self) {
        let needle = self.query.trim().to_lowercase();
        let mut filtered: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                needle.is_empty() || item.search_text().to_lowercase().contains(&needle)
            })
            .map(|(index, _)| index)
            .collect();

        self.sort.apply(&self.items, &mut filtered);
        self.filtered = filtered;
        self.nav.set_total_items(self.filtered.len());
    }
}

/// Type-erased controls shared by every listing screen.
pub trait CatalogControls {
    fn query(&self) -> &str;
    fn set_query(&mut self, query: String);
    fn sort(&self) -> SortOrder;
    fn cycle_sort(&mut self) -> SortOrder;
    fn nav(&self) -> &PageNav;
    fn next_page(&mut self) -> bool;
    fn previous_page(&mut self) -> bool;
    fn match_count(&self) -> usize;
    /// Number of records on the current page.
    fn visible_len(&self) -> usize;
}

impl<T: Listing> CatalogControls for Catalog<T> {
    fn query(&self) -> &str {
        Catalog::query(self)
    }

    fn set_query(&mut self, query: String) {
        Catalog::set_query(self, query)
    }

    fn sort(&self) -> SortOrder {
        Catalog::sort(self)
    }

    fn cycle_sort(&mut self) -> SortOrder {
        Catalog::cycle_sort(self)
    }

    fn nav(&self) -> &PageNav {
        Catalog::nav(self)
    }

    fn next_page(&mut self) -> bool {
        Catalog::next_page(self)
    }

    fn previous_page(&mut self) -> bool {
        Catalog::previous_page(self)
    }

    fn match_count(&self) -> usize {
        Catalog::match_count(self)
    }

    fn visible_len(&self) -> usize {
        self.nav.window().range().len()
    }
}
