//! Booking form: validation and price quotes.
//!
//! Requests are validated against the villa being booked and turned into a
//! [`BookingSummary`]. Nothing is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::BookingError;
use crate::models::Villa;

/// What the guest filled in on the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub villa_id: String,
    pub guest_name: String,
    pub email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}

/// Nights and price for a stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub nights: u32,
    pub nightly_rate: Option<f64>,
    /// `None` when the villa has no published rate.
    pub total: Option<f64>,
}

/// Confirmation shown after a successful submit.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSummary {
    pub villa_name: String,
    pub guest_name: String,
    pub email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub quote: Quote,
}

impl BookingRequest {
    /// Check the request against `villa`.
    pub fn validate(&self, villa: &Villa) -> Result<(), BookingError> {
        if self.villa_id != villa.id {
            return Err(BookingError::VillaMismatch {
                requested: self.villa_id.clone(),
                villa: villa.id.clone(),
            });
        }
        if self.guest_name.trim().is_empty() {
            return Err(BookingError::MissingName);
        }
        if !is_plausible_email(&self.email) {
            return Err(BookingError::InvalidEmail {
                email: self.email.clone(),
            });
        }
        if self.check_out <= self.check_in {
            return Err(BookingError::InvalidDateRange {
                check_in: self.check_in,
                check_out: self.check_out,
            });
        }
        if self.guests == 0 || self.guests > villa.max_guests {
            return Err(BookingError::GuestCount {
                requested: self.guests,
                max: villa.max_guests,
            });
        }
        Ok(())
    }

    /// Number of nights between check-in and check-out, zero if reversed.
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(0)
    }

    pub fn quote(&self, villa: &Villa) -> Quote {
        let nights = self.nights();
        Quote {
            nights,
            nightly_rate: villa.price_per_night,
            total: villa.price_per_night.map(|rate| rate * f64::from(nights)),
        }
    }

    /// Validate and build the confirmation.
    pub fn submit(&self, villa: &Villa) -> Result<BookingSummary, BookingError> {
        self.validate(villa)?;
        let quote = self.quote(villa);
        info!(
            villa = %villa.id,
            nights = quote.nights,
            guests = self.guests,
            "booking request accepted"
        );
        Ok(BookingSummary {
            villa_name: villa.name.clone(),
            guest_name: self.guest_name.trim().to_string(),
            email: self.email.trim().to_string(),
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            quote,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !email.contains(' ')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn villa() -> Villa {
        Villa {
            id: "beach".to_string(),
            name: "Beach Villa".to_string(),
            description: String::new(),
            price_per_night: Some(450.0),
            max_guests: 4,
            bedrooms: 2,
            image_urls: Vec::new(),
            amenities: Vec::new(),
            created_at: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request() -> BookingRequest {
        BookingRequest {
            villa_id: "beach".to_string(),
            guest_name: "Ana Ruiz".to_string(),
            email: "ana@example.com".to_string(),
            check_in: date(2025, 3, 10),
            check_out: date(2025, 3, 14),
            guests: 2,
        }
    }

    #[test]
    fn test_valid_request_quotes_total() {
        let summary = request().submit(&villa()).unwrap();
        assert_eq!(summary.quote.nights, 4);
        assert_eq!(summary.quote.total, Some(1800.0));
        assert_eq!(summary.villa_name, "Beach Villa");
    }

    #[test]
    fn test_blank_name() {
        let mut req = request();
        req.guest_name = "   ".to_string();
        assert_eq!(req.validate(&villa()), Err(BookingError::MissingName));
    }

    #[test]
    fn test_email_checks() {
        for bad in ["ana", "ana@", "@example.com", "a b@example.com", "a@b@c"] {
            let mut req = request();
            req.email = bad.to_string();
            assert!(
                matches!(req.validate(&villa()), Err(BookingError::InvalidEmail { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_same_day_checkout_rejected() {
        let mut req = request();
        req.check_out = req.check_in;
        assert!(matches!(
            req.validate(&villa()),
            Err(BookingError::InvalidDateRange { .. })
        ));
        assert_eq!(req.nights(), 0);
    }

    #[test]
    fn test_guest_bounds() {
        let mut req = request();
        req.guests = 0;
        assert!(req.validate(&villa()).is_err());
        req.guests = 5;
        assert_eq!(
            req.validate(&villa()),
            Err(BookingError::GuestCount {
                requested: 5,
                max: 4
            })
        );
        req.guests = 4;
        assert!(req.validate(&villa()).is_ok());
    }

    #[test]
    fn test_unpriced_villa_has_no_total() {
        let mut unpriced = villa();
        unpriced.price_per_night = None;
        let quote = request().quote(&unpriced);
        assert_eq!(quote.nights, 4);
        assert_eq!(quote.total, None);
    }
}
