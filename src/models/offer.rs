use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_amount, deserialize_nullable_string, Listing};

/// A promotional offer (package deal, seasonal discount).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    /// Marketing label such as "20% off".
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing for Offer {
    const COLLECTION: &'static str = "offers";

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_text(&self) -> String {
        let mut text = format!("{} {}", self.title, self.description);
        if let Some(discount) = &self.discount {
            text.push(' ');
            text.push_str(discount);
        }
        text
    }

    fn price(&self) -> Option<f64> {
        self.price
    }
}
