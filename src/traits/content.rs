//! Content store trait abstraction.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::ContentError;

/// One document from the content store: field name to plain JSON value.
///
/// Adapters put the document id under the `id` key.
pub type Record = Map<String, Value>;

/// Read-only source of ordered display records (offers, amenities, villas).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch every record in `collection`, ordered by `order_by` descending.
    async fn fetch_ordered(
        &self,
        collection: &str,
        order_by: &str,
    ) -> Result<Vec<Record>, ContentError>;
}
