//! Unified error type for the resort site.

use thiserror::Error;

use super::booking::BookingError;
use super::category::ErrorCategory;
use super::config::ConfigError;
use super::content::ContentError;

/// Unified error type consolidating the domain errors.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SiteError {
    /// Category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::Content(err) => match err {
                ContentError::Transport { .. } => ErrorCategory::Network,
                ContentError::HttpStatus { .. } => ErrorCategory::Server,
                ContentError::MalformedResponse { .. } | ContentError::Decode { .. } => {
                    ErrorCategory::Content
                }
            },
            SiteError::Config(_) | SiteError::Io(_) => ErrorCategory::Configuration,
            SiteError::Booking(_) => ErrorCategory::User,
        }
    }

    /// Whether retrying the failed operation may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SiteError::Content(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Message suitable for the status line.
    pub fn user_message(&self) -> String {
        match self {
            SiteError::Content(ContentError::Transport { .. }) => {
                "Unable to reach the content server. Press F5 to try again.".to_string()
            }
            SiteError::Content(ContentError::HttpStatus { status, .. }) => match *status {
                401 | 403 => "The content server refused the request. Check the API key.".to_string(),
                404 => "The requested collection was not found.".to_string(),
                500..=599 => "The content server is having trouble. Press F5 to try again.".to_string(),
                _ => format!("The content server returned an error (HTTP {}).", status),
            },
            SiteError::Content(_) => {
                "Some content could not be displayed. Please try again later.".to_string()
            }
            SiteError::Config(err) => format!("Configuration problem: {}", err),
            SiteError::Booking(err) => err.to_string(),
            SiteError::Io(err) => format!("File error: {}", err),
        }
    }
}
