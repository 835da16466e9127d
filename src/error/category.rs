//! Error category classification.
//!
//! Categories drive the status-line wording and whether the UI offers a
//! retry action.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection failures and timeouts. Retryable.
    Network,

    /// Content store returned an error status. Retryable after a delay.
    Server,

    /// Content store returned data we could not decode.
    Content,

    /// User action required (invalid booking form input).
    User,

    /// Missing or invalid settings.
    Configuration,
}

impl ErrorCategory {
    /// Short label suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Content => "content",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
