//! Scripted embed provider for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::EmbedLoadFailure;
use crate::traits::EmbedProvider;

/// Embed provider that replays a queue of outcomes.
///
/// Once the queue is empty every load succeeds. Each call is recorded as
/// `(url, instance_key)`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEmbedProvider {
    outcomes: Arc<Mutex<VecDeque<Result<(), EmbedLoadFailure>>>>,
    loads: Arc<Mutex<Vec<(String, u64)>>>,
    latency: Duration,
}

impl ScriptedEmbedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose next `count` loads fail.
    pub fn failing(count: usize) -> Self {
        let provider = Self::new();
        for _ in 0..count {
            provider.push_failure("scripted failure");
        }
        provider
    }

    /// Delay every load by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn push_success(&self) {
        self.outcomes.lock().unwrap().push_back(Ok(()));
    }

    pub fn push_failure(&self, reason: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(EmbedLoadFailure::new(reason)));
    }

    /// Recorded `(url, instance_key)` pairs, oldest first.
    pub fn loads(&self) -> Vec<(String, u64)> {
        self.loads.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmbedProvider for ScriptedEmbedProvider {
    async fn load(&self, url: &str, instance_key: u64) -> Result<(), EmbedLoadFailure> {
        self.loads
            .lock()
            .unwrap()
            .push((url.to_string(), instance_key));
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}
