use std::cmp::Ordering;

use crate::models::Listing;

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Content store order (newest first).
    #[default]
    Newest,
    PriceLowToHigh,
    PriceHighToLow,
    Name,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::PriceLowToHigh => "Price: low to high",
            SortOrder::PriceHighToLow => "Price: high to low",
            SortOrder::Name => "Name",
        }
    }

    pub fn next(&self) -> SortOrder {
        match self {
            SortOrder::Newest => SortOrder::PriceLowToHigh,
            SortOrder::PriceLowToHigh => SortOrder::PriceHighToLow,
            SortOrder::PriceHighToLow => SortOrder::Name,
            SortOrder::Name => SortOrder::Newest,
        }
    }

    /// Reorder `indices` into `items`. Stable, so ties keep store order.
    /// Records without a price sort after priced ones in both directions.
    pub(crate) fn apply<T: Listing>(&self, items: &[T], indices: &mut [usize]) {
        match self {
            SortOrder::Newest => indices.sort_unstable(),
            SortOrder::PriceLowToHigh => {
                indices.sort_by(|&a, &b| compare_price(items[a].price(), items[b].price(), false))
            }
            SortOrder::PriceHighToLow => {
                indices.sort_by(|&a, &b| compare_price(items[a].price(), items[b].price(), true))
            }
            SortOrder::Name => indices.sort_by(|&a, &b| {
                items[a]
                    .title()
                    .to_lowercase()
                    .cmp(&items[b].title().to_lowercase())
            }),
        }
    }
}

fn compare_price(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ordering = a.total_cmp(&b);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start() {
        let mut order = SortOrder::default();
        for _ in 0..4 {
            order = order.next();
        }
        assert_eq!(order, SortOrder::Newest);
    }

    #[test]
    fn test_missing_prices_sort_last() {
        assert_eq!(compare_price(None, Some(1.0), false), Ordering::Greater);
        assert_eq!(compare_price(None, Some(1.0), true), Ordering::Greater);
        assert_eq!(compare_price(Some(2.0), Some(1.0), true), Ordering::Less);
    }
}
