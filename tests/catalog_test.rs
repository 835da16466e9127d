// Catalog behaviour over the sample content: search, sort and paging as
// the listing screens use them.

use resort_site::adapters::InMemoryContentStore;
use resort_site::app::fetch_listing;
use resort_site::catalog::{Catalog, SortOrder};
use resort_site::models::{Amenity, Offer, Villa};

async fn villas(per_page: usize) -> Catalog<Villa> {
    let store = InMemoryContentStore::with_sample_content();
    let mut catalog = Catalog::new(per_page);
    catalog.set_items(fetch_listing(&store).await.unwrap());
    catalog
}

fn names(catalog: &Catalog<Villa>) -> Vec<&str> {
    catalog.visible().iter().map(|v| v.name.as_str()).collect()
}

#[tokio::test]
async fn test_newest_first_by_default() {
    let catalog = villas(2).await;
    assert_eq!(catalog.sort(), SortOrder::Newest);
    assert_eq!(names(&catalog), vec!["Beach Villa", "Water Villa"]);
    assert_eq!(catalog.total_pages(), 3);
}

#[tokio::test]
async fn test_price_sorts() {
    let mut catalog = villas(5).await;

    catalog.set_sort(SortOrder::PriceLowToHigh);
    let low: Vec<f64> = catalog.visible().iter().filter_map(|v| v.price_per_night).collect();
    assert!(low.windows(2).all(|w| w[0] <= w[1]));

    catalog.set_sort(SortOrder::PriceHighToLow);
    assert_eq!(names(&catalog)[0], "Sunset Residence");
}

#[tokio::test]
async fn test_name_sort_is_case_insensitive() {
    let mut catalog = villas(5).await;
    catalog.set_sort(SortOrder::Name);
    assert_eq!(
        names(&catalog),
        vec![
            "Beach Villa",
            "Family Villa",
            "Garden Pool Villa",
            "Sunset Residence",
            "Water Villa"
        ]
    );
}

#[tokio::test]
async fn test_search_matches_amenities_and_description() {
    let mut catalog = villas(2).await;
    catalog.go_to_page(3);

    catalog.set_query("private pool");
    assert_eq!(catalog.current_page(), 1);
    assert_eq!(catalog.match_count(), 2);

    catalog.set_query("glass");
    assert_eq!(names(&catalog), vec!["Water Villa"]);

    catalog.set_query("nothing like this");
    assert!(catalog.visible().is_empty());
    assert_eq!(catalog.total_pages(), 0);
    assert!(!catalog.next_page());
}

#[tokio::test]
async fn test_search_and_sort_combine() {
    let mut catalog = villas(5).await;
    catalog.set_query("pool");
    catalog.set_sort(SortOrder::PriceHighToLow);
    assert_eq!(
        names(&catalog),
        vec!["Sunset Residence", "Family Villa", "Garden Pool Villa"]
    );
}

#[tokio::test]
async fn test_offer_and_amenity_catalogs() {
    let store = InMemoryContentStore::with_sample_content();

    let mut offers: Catalog<Offer> = Catalog::new(6);
    offers.set_items(fetch_listing(&store).await.unwrap());
    assert_eq!(offers.total_pages(), 2);
    offers.set_query("spa");
    assert!(offers.visible().iter().all(|o| {
        format!("{} {}", o.title, o.description).to_lowercase().contains("spa")
            || o.discount.as_deref().unwrap_or("").to_lowercase().contains("spa")
    }));

    let mut amenities: Catalog<Amenity> = Catalog::new(6);
    amenities.set_items(fetch_listing(&store).await.unwrap());
    amenities.set_query("wellness");
    assert_eq!(amenities.match_count(), 2);
}
