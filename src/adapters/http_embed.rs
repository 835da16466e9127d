//! Embed provider that probes the embed URL over HTTP.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::EmbedLoadFailure;
use crate::traits::{EmbedProvider, Headers, HttpClient};

/// Treats a 2xx response to a GET of the embed URL as a successful load.
pub struct HttpEmbedProvider {
    http: Arc<dyn HttpClient>,
}

impl HttpEmbedProvider {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl EmbedProvider for HttpEmbedProvider {
    async fn load(&self, url: &str, instance_key: u64) -> Result<(), EmbedLoadFailure> {
        debug!(url, instance_key, "probing embed");
        let response = self
            .http
            .get(url, &Headers::new())
            .await
            .map_err(|err| EmbedLoadFailure::new(err.to_string()))?;

        if response.is_success() {
            Ok(())
        } else {
            Err(EmbedLoadFailure::new(format!("HTTP {}", response.status)))
        }
    }
}
