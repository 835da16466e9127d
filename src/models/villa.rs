use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_amount, deserialize_nullable_string, Listing};

/// A bookable villa with its own detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Villa {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub price_per_night: Option<f64>,
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_max_guests() -> u32 {
    2
}

impl Listing for Villa {
    const COLLECTION: &'static str = "villas";

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.description,
            self.amenities.join(" ")
        )
    }

    fn price(&self) -> Option<f64> {
        self.price_per_night
    }
}
