//! Embed load failure signal.

use thiserror::Error;

/// Raised by an embed provider when the remote resource did not load.
///
/// Handled entirely by the embed reload controller; it is never propagated
/// past the controller's visible state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("embed failed to load: {reason}")]
pub struct EmbedLoadFailure {
    pub reason: String,
}

impl EmbedLoadFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
