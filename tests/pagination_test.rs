// Integration tests for the pagination engine: slicing, page markers and
// the navigation controls built on top of them.

use resort_site::pagination::{
    compute_visible_page_indices, paginate, total_pages, PageMarker, PageNav, PageWindow,
};

#[test]
fn test_paginate_length_matches_formula() {
    for total in 0..40usize {
        let data: Vec<usize> = (0..total).collect();
        for per_page in 1..8usize {
            for page in 1..12usize {
                let expected = per_page.min(total.saturating_sub((page - 1) * per_page));
                let slice = paginate(&data, page, per_page);
                assert_eq!(
                    slice.len(),
                    expected,
                    "total={total} per_page={per_page} page={page}"
                );
                if let Some(first) = slice.first() {
                    assert_eq!(*first, (page - 1) * per_page);
                }
            }
        }
    }
}

#[test]
fn test_markers_are_in_range_unique_and_anchored() {
    for max_visible in 0..8usize {
        for total in 0..30usize {
            for current in 1..=total.max(1) {
                let markers = compute_visible_page_indices(current, total, max_visible);
                let pages: Vec<usize> = markers.iter().filter_map(PageMarker::page).collect();

                assert!(pages.iter().all(|p| (1..=total).contains(p)));
                assert!(
                    pages.windows(2).all(|w| w[0] < w[1]),
                    "pages not strictly increasing for {current}/{total}: {pages:?}"
                );

                if total > max_visible {
                    assert_eq!(pages.first(), Some(&1));
                    assert_eq!(pages.last(), Some(&total));
                    assert!(pages.contains(&current));
                } else {
                    assert_eq!(pages, (1..=total).collect::<Vec<_>>());
                }

                // an ellipsis never sits next to another one
                assert!(!markers
                    .windows(2)
                    .any(|w| w[0] == PageMarker::Ellipsis && w[1] == PageMarker::Ellipsis));
            }
        }
    }
}

#[test]
fn test_middle_page_of_forty_seven() {
    let window = PageWindow::new(3, 10, 47);
    assert_eq!(window.range(), 20..30);
    assert_eq!(window.total_pages(), 5);
    assert!(window.has_previous());
    assert!(window.has_next());

    let data: Vec<u32> = (0..47).collect();
    assert_eq!(paginate(&data, 3, 10), &data[20..30]);
    assert_eq!(total_pages(47, 10), 5);
}

#[test]
fn test_page_past_the_end_is_empty() {
    let data = [1, 2, 3];
    assert!(paginate(&data, 4, 1).is_empty());
    assert!(paginate(&data, 2, 5).is_empty());
}

#[test]
fn test_nav_walks_every_page_once() {
    let mut nav = PageNav::new(10);
    nav.set_total_items(47);

    let mut visited = vec![nav.current_page()];
    while nav.next() {
        visited.push(nav.current_page());
    }
    assert_eq!(visited, vec![1, 2, 3, 4, 5]);
    assert!(!nav.can_go_next());

    while nav.previous() {}
    assert_eq!(nav.current_page(), 1);
    assert!(!nav.can_go_previous());
}

#[test]
fn test_catalog_sized_nav_with_no_page_budget() {
    let mut nav = PageNav::new(10).with_max_visible(0);
    nav.set_total_items(3);
    assert_eq!(nav.markers(), vec![PageMarker::Number(1)]);

    nav.set_total_items(25);
    nav.go_to(2);
    assert_eq!(
        nav.markers(),
        vec![PageMarker::Number(1), PageMarker::Number(2), PageMarker::Number(3)]
    );
}

#[test]
fn test_nav_markers_follow_current_page() {
    let mut nav = PageNav::new(1);
    nav.set_total_items(20);
    nav.go_to(10);
    assert_eq!(
        nav.markers(),
        vec![
            PageMarker::Number(1),
            PageMarker::Ellipsis,
            PageMarker::Number(9),
            PageMarker::Number(10),
            PageMarker::Number(11),
            PageMarker::Ellipsis,
            PageMarker::Number(20),
        ]
    );
}
