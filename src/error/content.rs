//! Content store error types.

use thiserror::Error;

/// Failures while reading display records from the content store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The request never produced a response.
    #[error("content store unreachable: {message}")]
    Transport { message: String },

    /// The store answered with a non-2xx status.
    #[error("content store returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The response body was not in the expected shape.
    #[error("malformed content store response: {message}")]
    MalformedResponse { message: String },

    /// A record could not be decoded into its display model.
    #[error("record {id} in '{collection}' could not be decoded: {message}")]
    Decode {
        collection: String,
        id: String,
        message: String,
    },
}

impl ContentError {
    /// Check if the failed read is worth repeating.
    pub fn is_retryable(&self) -> bool {
        match self {
            ContentError::Transport { .. } => true,
            ContentError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            ContentError::MalformedResponse { .. } | ContentError::Decode { .. } => false,
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::Transport { .. } => "E_CONTENT_TRANSPORT",
            ContentError::HttpStatus { .. } => "E_CONTENT_HTTP",
            ContentError::MalformedResponse { .. } => "E_CONTENT_MALFORMED",
            ContentError::Decode { .. } => "E_CONTENT_DECODE",
        }
    }
}
