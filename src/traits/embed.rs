//! Embed provider trait abstraction.

use async_trait::async_trait;

use crate::error::EmbedLoadFailure;

/// A remotely hosted resource rendered inline (e.g. the location map).
///
/// Each call is one load attempt for the given remount token; a fresh
/// `instance_key` means a fresh request.
#[async_trait]
pub trait EmbedProvider: Send + Sync {
    async fn load(&self, url: &str, instance_key: u64) -> Result<(), EmbedLoadFailure>;
}
