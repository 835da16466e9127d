//! Result type alias for site operations.

use super::site_error::SiteError;

/// Type alias for Results using SiteError.
pub type SiteResult<T> = Result<T, SiteError>;
