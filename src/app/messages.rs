//! Messages delivered to the event loop by background tasks.

use crate::embed::EmbedEvent;
use crate::error::ContentError;
use crate::models::{Amenity, Offer, Villa};

/// Results of content fetches spawned by the app.
#[derive(Debug, Clone)]
pub enum AppMessage {
    OffersLoaded(Vec<Offer>),
    AmenitiesLoaded(Vec<Amenity>),
    VillasLoaded(Vec<Villa>),
    /// A collection could not be fetched or decoded.
    ContentFailed {
        collection: &'static str,
        error: ContentError,
    },
}

/// Embed event tagged with the contact-page mount that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEvent {
    pub mount: u64,
    pub event: EmbedEvent,
}
