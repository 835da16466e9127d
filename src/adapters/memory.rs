//! In-memory content store.
//!
//! Backs `--offline` runs and tests. Ordering follows the content store
//! contract: descending by the requested field, records missing the field
//! last.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ContentError;
use crate::traits::{ContentStore, Record};

/// Content store holding collections in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Record>>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to `collection`.
    pub fn insert(&self, collection: &str, record: Record) {
        if let Ok(mut collections) = self.collections.write() {
            collections
                .entry(collection.to_string())
                .or_default()
                .push(record);
        }
    }

    /// Insert a JSON object literal; non-objects are ignored.
    pub fn insert_json(&self, collection: &str, value: Value) {
        if let Value::Object(record) = value {
            self.insert(collection, record);
        }
    }

    /// Store pre-filled with a small resort catalog.
    pub fn with_sample_content() -> Self {
        let store = Self::new();
        let offers = [
            ("early-bird", "Early Bird Escape", "Book 60 days ahead and save on any villa.", "25% off", 0, "2024-06-01T09:00:00Z"),
            ("honeymoon", "Honeymoon Package", "Champagne, couples massage and sunset dinner.", "Free spa", 1890, "2024-05-20T09:00:00Z"),
            ("long-stay", "Stay 7, Pay 5", "Two nights on us for week-long stays.", "2 free nights", 0, "2024-05-02T09:00:00Z"),
            ("family", "Family Fun", "Kids club access and a free extra bed.", "Kids stay free", 0, "2024-04-11T09:00:00Z"),
            ("spa-retreat", "Spa Retreat", "Daily treatments and a wellness consultation.", "15% off", 1240, "2024-03-30T09:00:00Z"),
            ("dive", "Reef Explorer", "Guided dives on the house reef for certified divers.", "3 dives", 760, "2024-03-02T09:00:00Z"),
            ("romance", "Romantic Getaway", "Private beach dinner under the stars.", "Dinner included", 980, "2024-02-14T09:00:00Z"),
        ];
        for (id, title, description, discount, price, created_at) in offers {
            let price = (price > 0).then_some(price);
            store.insert_json(
                "offers",
                json!({
                    "id": id,
                    "title": title,
                    "description": description,
                    "discount": discount,
                    "price": price,
                    "createdAt": created_at,
                }),
            );
        }

        let amenities = [
            ("pool", "Infinity Pool", "Overlooking the lagoon, open sunrise to sunset.", "Leisure"),
            ("spa", "Lagoon Spa", "Six treatment rooms over the water.", "Wellness"),
            ("gym", "Fitness Pavilion", "Open-air gym with yoga deck.", "Wellness"),
            ("restaurant", "Coral Kitchen", "Seafood grill with daily catch.", "Dining"),
            ("bar", "Sunset Bar", "Cocktails on the western jetty.", "Dining"),
            ("kids", "Kids Club", "Supervised activities for ages 4-12.", "Family"),
            ("dive", "Dive Centre", "PADI courses and equipment rental.", "Activities"),
            ("library", "Reading Room", "Quiet lounge with books and board games.", "Leisure"),
        ];
        for (index, (id, name, description, category)) in amenities.into_iter().enumerate() {
            store.insert_json(
                "amenities",
                json!({
                    "id": id,
                    "name": name,
                    "description": description,
                    "category": category,
                    "createdAt": format!("2024-01-{:02}T08:00:00Z", 20 - index),
                }),
            );
        }

        let villas = [
            ("beach", "Beach Villa", "Steps from the sand with a private deck.", 420, 2, 1, vec!["Private deck", "Outdoor shower"]),
            ("water", "Water Villa", "Over-water villa with glass floor panels.", 690, 2, 1, vec!["Glass floor", "Lagoon access"]),
            ("garden", "Garden Pool Villa", "Tropical garden and plunge pool.", 510, 4, 2, vec!["Plunge pool", "Garden"]),
            ("family", "Family Villa", "Two bedrooms and a bunk room for kids.", 780, 6, 3, vec!["Private pool", "Kitchenette"]),
            ("sunset", "Sunset Residence", "Top-floor suite facing west.", 1150, 4, 2, vec!["Butler", "Private pool", "Jacuzzi"]),
        ];
        for (index, (id, name, description, price, guests, bedrooms, amenities)) in
            villas.into_iter().enumerate()
        {
            store.insert_json(
                "villas",
                json!({
                    "id": id,
                    "name": name,
                    "description": description,
                    "pricePerNight": price,
                    "maxGuests": guests,
                    "bedrooms": bedrooms,
                    "amenities": amenities,
                    "createdAt": format!("2024-02-{:02}T08:00:00Z", 10 - index),
                }),
            );
        }

        store
    }
}

fn compare_desc(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let a = a.as_f64().unwrap_or_default();
            let b = b.as_f64().unwrap_or_default();
            b.partial_cmp(&a).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn fetch_ordered(
        &self,
        collection: &str,
        order_by: &str,
    ) -> Result<Vec<Record>, ContentError> {
        let collections = self
            .collections
            .read()
            .map_err(|err| ContentError::Transport {
                message: err.to_string(),
            })?;
        let mut records = collections.get(collection).cloned().unwrap_or_default();
        records.sort_by(|a, b| compare_desc(a.get(order_by), b.get(order_by)));
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_orders_descending_missing_last() {
        let store = InMemoryContentStore::new();
        store.insert_json("offers", json!({"id": "old", "createdAt": "2023-01-01T00:00:00Z"}));
        store.insert_json("offers", json!({"id": "none"}));
        store.insert_json("offers", json!({"id": "new", "createdAt": "2024-01-01T00:00:00Z"}));

        let records = store.fetch_ordered("offers", "createdAt").await.unwrap();
        let ids: Vec<_> = records.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["new", "old", "none"]);
    }

    #[tokio::test]
    async fn test_unknown_collection_is_empty() {
        let store = InMemoryContentStore::new();
        assert!(store.fetch_ordered("nope", "createdAt").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sample_content_decodes() {
        use crate::models::{decode_records, Amenity, Listing, Offer, Villa};

        let store = InMemoryContentStore::with_sample_content();
        let offers: Vec<Offer> =
            decode_records(store.fetch_ordered(Offer::COLLECTION, Offer::ORDER_BY).await.unwrap())
                .unwrap();
        let amenities: Vec<Amenity> = decode_records(
            store
                .fetch_ordered(Amenity::COLLECTION, Amenity::ORDER_BY)
                .await
                .unwrap(),
        )
        .unwrap();
        let villas: Vec<Villa> =
            decode_records(store.fetch_ordered(Villa::COLLECTION, Villa::ORDER_BY).await.unwrap())
                .unwrap();

        assert_eq!(offers.len(), 7);
        assert_eq!(offers[0].id, "early-bird");
        assert_eq!(amenities.len(), 8);
        assert_eq!(villas.len(), 5);
        assert_eq!(villas[0].id, "beach");
    }
}
