//! Background content loading.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use super::{App, AppMessage, LoadStatus};
use crate::error::ContentError;
use crate::models::{decode_records, Amenity, Listing, Offer, Villa};
use crate::traits::ContentStore;

/// Fetch one collection in store order and decode it.
pub async fn fetch_listing<T: Listing>(store: &dyn ContentStore) -> Result<Vec<T>, ContentError> {
    let records = store.fetch_ordered(T::COLLECTION, T::ORDER_BY).await?;
    decode_records(records)
}

fn spawn_fetch<T, F>(
    store: Arc<dyn ContentStore>,
    tx: mpsc::UnboundedSender<AppMessage>,
    loaded: F,
) where
    T: Listing,
    F: FnOnce(Vec<T>) -> AppMessage + Send + 'static,
{
    tokio::spawn(async move {
        let message = match fetch_listing::<T>(store.as_ref()).await {
            Ok(items) => {
                info!(collection = T::COLLECTION, count = items.len(), "content loaded");
                loaded(items)
            }
            Err(err) => {
                error!(
                    collection = T::COLLECTION,
                    code = err.error_code(),
                    error = %err,
                    "content load failed"
                );
                AppMessage::ContentFailed {
                    collection: T::COLLECTION,
                    error: err,
                }
            }
        };
        let _ = tx.send(message);
    });
}

impl App {
    /// Start fetching every collection. Results arrive as [`AppMessage`]s.
    pub fn load_content(&mut self) {
        self.offers_status = LoadStatus::Loading;
        self.amenities_status = LoadStatus::Loading;
        self.villas_status = LoadStatus::Loading;

        spawn_fetch::<Offer, _>(self.store.clone(), self.message_tx.clone(), AppMessage::OffersLoaded);
        spawn_fetch::<Amenity, _>(
            self.store.clone(),
            self.message_tx.clone(),
            AppMessage::AmenitiesLoaded,
        );
        spawn_fetch::<Villa, _>(self.store.clone(), self.message_tx.clone(), AppMessage::VillasLoaded);
        self.mark_dirty();
    }
}
