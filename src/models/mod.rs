//! Display models decoded from content store records.

mod amenity;
mod offer;
mod villa;

pub use amenity::Amenity;
pub use offer::Offer;
pub use villa::Villa;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::ContentError;
use crate::traits::Record;

/// A record type shown in a paginated listing.
pub trait Listing: DeserializeOwned + Clone + Send + 'static {
    /// Content store collection holding these records.
    const COLLECTION: &'static str;
    /// Field the collection is ordered by (descending).
    const ORDER_BY: &'static str = "createdAt";

    fn id(&self) -> &str;

    /// Heading shown in lists.
    fn title(&self) -> &str;

    /// Text the search bar matches against.
    fn search_text(&self) -> String;

    /// Price used by price sorts, if the record has one.
    fn price(&self) -> Option<f64> {
        None
    }
}

/// Decode raw records into display models, keeping store order.
pub fn decode_records<T: Listing>(records: Vec<Record>) -> Result<Vec<T>, ContentError> {
    records
        .into_iter()
        .map(|record| {
            let id = record
                .get("id")
                .and_then(|value| value.as_str())
                .unwrap_or("<unknown>")
                .to_string();
            serde_json::from_value(serde_json::Value::Object(record)).map_err(|err| {
                ContentError::Decode {
                    collection: T::COLLECTION.to_string(),
                    id,
                    message: err.to_string(),
                }
            })
        })
        .collect()
}

/// Deserialize a number that may arrive as a JSON string ("450") or number.
pub(crate) fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(f64),
        Text(String),
    }

    match Option::<Amount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Amount::Number(value)) => Ok(Some(value)),
        Some(Amount::Text(text)) => {
            let cleaned: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            cleaned.parse().map(Some).map_err(serde::de::Error::custom)
        }
    }
}

/// Deserialize nullable strings as empty string.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
