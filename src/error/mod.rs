//! Error handling for the resort site.
//!
//! - **Error categories**: classification for retry and messaging decisions
//! - **Domain errors**: content store, configuration, booking form
//! - **Unified error type**: `SiteError` with `SiteResult<T>`
//!
//! [`EmbedLoadFailure`] is separate: it is consumed by the embed reload
//! controller and never converted into a `SiteError`.

mod booking;
mod category;
mod config;
mod content;
mod embed;
mod result;
mod site_error;

pub use booking::BookingError;
pub use category::ErrorCategory;
pub use config::ConfigError;
pub use content::ContentError;
pub use embed::EmbedLoadFailure;
pub use result::SiteResult;
pub use site_error::SiteError;
