//! The embed element itself: performs load attempts through an
//! [`EmbedProvider`] and reports the outcome as [`EmbedEvent`]s.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use super::state::EmbedEvent;
use crate::traits::EmbedProvider;

/// A mounted remote embed.
///
/// Mounting with a new remount token tears down the in-flight attempt and
/// starts a fresh one.
pub struct EmbedFrame {
    provider: Arc<dyn EmbedProvider>,
    url: String,
    events: mpsc::UnboundedSender<EmbedEvent>,
    attempt: Option<JoinHandle<()>>,
}

impl EmbedFrame {
    pub fn new(
        provider: Arc<dyn EmbedProvider>,
        url: impl Into<String>,
        events: mpsc::UnboundedSender<EmbedEvent>,
    ) -> Self {
        Self {
            provider,
            url: url.into(),
            events,
            attempt: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Start a load attempt for `instance_key`, abandoning any previous one.
    pub fn mount(&mut self, instance_key: u64) {
        self.unmount();
        debug!(instance_key, url = %self.url, "mounting embed");

        let provider = Arc::clone(&self.provider);
        let url = self.url.clone();
        let events = self.events.clone();
        self.attempt = Some(tokio::spawn(async move {
            let event = match provider.load(&url, instance_key).await {
                Ok(()) => EmbedEvent::LoadSucceeded { instance_key },
                Err(failure) => EmbedEvent::LoadFailed {
                    instance_key,
                    failure,
                },
            };
            let _ = events.send(event);
        }));
    }

    /// Abort the in-flight attempt, if any.
    pub fn unmount(&mut self) {
        if let Some(attempt) = self.attempt.take() {
            attempt.abort();
        }
    }
}

impl Drop for EmbedFrame {
    fn drop(&mut self) {
        self.unmount();
    }
}
