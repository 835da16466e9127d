//! Booking form validation errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Reasons a booking request is rejected before a quote is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// A form field could not be parsed.
    #[error("{field}: '{value}' is not valid")]
    Unparsable { field: &'static str, value: String },

    #[error("guest name is required")]
    MissingName,

    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },

    #[error("check-out ({check_out}) must be after check-in ({check_in})")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("{requested} guests requested, villa sleeps between 1 and {max}")]
    GuestCount { requested: u32, max: u32 },

    #[error("booking is for villa '{requested}' but '{villa}' was given")]
    VillaMismatch { requested: String, villa: String },
}
