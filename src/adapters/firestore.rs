//! Firestore REST adapter for the [`ContentStore`] trait.
//!
//! Issues a `runQuery` with a single descending `orderBy` and flattens
//! Firestore's typed values (`{"stringValue": "..."}`) into plain JSON.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::error::ContentError;
use crate::traits::{ContentStore, Headers, HttpClient, HttpError, Record};

/// Public Firestore REST endpoint.
pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";

/// Content store backed by a Firestore database.
pub struct FirestoreContentStore {
    http: Arc<dyn HttpClient>,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreContentStore {
    pub fn new(http: Arc<dyn HttpClient>, project_id: impl Into<String>) -> Self {
        Self {
            http,
            base_url: DEFAULT_FIRESTORE_URL.to_string(),
            project_id: project_id.into(),
            api_key: None,
        }
    }

    /// Override the REST endpoint (emulator or test server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Web API key sent as the `key` query parameter.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// URL of the `runQuery` endpoint for the default database.
    pub fn query_url(&self) -> String {
        let mut url = format!(
            "{}/projects/{}/databases/(default)/documents:runQuery",
            self.base_url,
            urlencoding::encode(&self.project_id)
        );
        if let Some(key) = &self.api_key {
            url.push_str("?key=");
            url.push_str(&urlencoding::encode(key));
        }
        url
    }

    fn query_body(collection: &str, order_by: &str) -> Value {
        json!({
            "structuredQuery": {
                "from": [{ "collectionId": collection }],
                "orderBy": [{
                    "field": { "fieldPath": order_by },
                    "direction": "DESCENDING"
                }]
            }
        })
    }
}

#[async_trait]
impl ContentStore for FirestoreContentStore {
    async fn fetch_ordered(
        &self,
        collection: &str,
        order_by: &str,
    ) -> Result<Vec<Record>, ContentError> {
        debug!(collection, order_by, "querying firestore");

        let response = self
            .http
            .post_json(
                &self.query_url(),
                &Self::query_body(collection, order_by),
                &Headers::new(),
            )
            .await
            .map_err(|err: HttpError| ContentError::Transport {
                message: err.to_string(),
            })?;

        if !response.is_success() {
            return Err(ContentError::HttpStatus {
                status: response.status,
                message: response.text_lossy(),
            });
        }

        let rows: Vec<Value> = response
            .json()
            .map_err(|err| ContentError::MalformedResponse {
                message: err.to_string(),
            })?;

        let records = rows
            .iter()
            .filter_map(|row| row.get("document"))
            .map(document_to_record)
            .collect::<Result<Vec<_>, _>>()?;

        info!(collection, count = records.len(), "loaded content");
        Ok(records)
    }
}

/// Convert one Firestore document into a flat record with an `id` key.
pub fn document_to_record(document: &Value) -> Result<Record, ContentError> {
    let name = document
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ContentError::MalformedResponse {
            message: "document without a name".to_string(),
        })?;
    let id = name.rsplit('/').next().unwrap_or(name).to_string();

    let mut record = match document.get("fields") {
        Some(Value::Object(fields)) => decode_fields(fields),
        Some(_) => {
            return Err(ContentError::MalformedResponse {
                message: format!("document {id} has non-object fields"),
            })
        }
        None => Map::new(),
    };
    record.insert("id".to_string(), Value::String(id));
    Ok(record)
}

fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

/// Flatten one Firestore typed value.
pub fn decode_value(value: &Value) -> Value {
    let Some((kind, inner)) = value.as_object().and_then(|obj| obj.iter().next()) else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner.clone(),
        "booleanValue" | "doubleValue" => inner.clone(),
        "integerValue" => match inner {
            Value::String(text) => text
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| inner.clone()),
            other => other.clone(),
        },
        "nullValue" => Value::Null,
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        "mapValue" => Value::Object(
            inner
                .get("fields")
                .and_then(Value::as_object)
                .map(decode_fields)
                .unwrap_or_default(),
        ),
        "geoPointValue" => inner.clone(),
        _ => Value::Null,
    }
}
