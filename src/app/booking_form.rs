//! Booking form state: text fields, focus, and conversion to a request.

use chrono::NaiveDate;

use crate::booking::{BookingRequest, BookingSummary};
use crate::error::BookingError;
use crate::models::Villa;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    CheckIn,
    CheckOut,
    Guests,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::CheckIn,
        FormField::CheckOut,
        FormField::Guests,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full name",
            FormField::Email => "Email",
            FormField::CheckIn => "Check-in (YYYY-MM-DD)",
            FormField::CheckOut => "Check-out (YYYY-MM-DD)",
            FormField::Guests => "Guests",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Booking form for one villa.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub villa_id: String,
    values: [String; 5],
    focus: FormField,
    pub error: Option<String>,
    pub summary: Option<BookingSummary>,
}

impl BookingForm {
    pub fn new(villa_id: impl Into<String>) -> Self {
        Self {
            villa_id: villa_id.into(),
            values: Default::default(),
            focus: FormField::Name,
            error: None,
            summary: None,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % FormField::ALL.len();
        self.focus = FormField::ALL[next];
    }

    pub fn focus_previous(&mut self) {
        let len = FormField::ALL.len();
        let previous = (self.focus.index() + len - 1) % len;
        self.focus = FormField::ALL[previous];
    }

    pub fn insert_char(&mut self, c: char) {
        self.values[self.focus.index()].push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.values[self.focus.index()].pop();
        self.error = None;
    }

    /// Parse the text fields into a request.
    pub fn to_request(&self) -> Result<BookingRequest, BookingError> {
        Ok(BookingRequest {
            villa_id: self.villa_id.clone(),
            guest_name: self.value(FormField::Name).trim().to_string(),
            email: self.value(FormField::Email).trim().to_string(),
            check_in: parse_date("check-in", self.value(FormField::CheckIn))?,
            check_out: parse_date("check-out", self.value(FormField::CheckOut))?,
            guests: parse_guests(self.value(FormField::Guests))?,
        })
    }

    /// Validate against `villa`, recording the summary or the error message.
    pub fn submit(&mut self, villa: &Villa) -> Result<&BookingSummary, BookingError> {
        let result = self.to_request().and_then(|request| request.submit(villa));
        match result {
            Ok(summary) => {
                self.error = None;
                Ok(&*self.summary.insert(summary))
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.summary = None;
                Err(err)
            }
        }
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| BookingError::Unparsable {
        field,
        value: raw.to_string(),
    })
}

fn parse_guests(raw: &str) -> Result<u32, BookingError> {
    raw.trim().parse().map_err(|_| BookingError::Unparsable {
        field: "guests",
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn villa() -> Villa {
        Villa {
            id: "garden".to_string(),
            name: "Garden Villa".to_string(),
            description: String::new(),
            price_per_night: Some(300.0),
            max_guests: 3,
            bedrooms: 1,
            image_urls: Vec::new(),
            amenities: Vec::new(),
            created_at: None,
        }
    }

    fn filled() -> BookingForm {
        let mut form = BookingForm::new("garden");
        form.set_value(FormField::Name, "Sam Lee");
        form.set_value(FormField::Email, "sam@example.org");
        form.set_value(FormField::CheckIn, "2025-07-01");
        form.set_value(FormField::CheckOut, "2025-07-03");
        form.set_value(FormField::Guests, "2");
        form
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = BookingForm::new("garden");
        form.focus_previous();
        assert_eq!(form.focus(), FormField::Guests);
        form.focus_next();
        assert_eq!(form.focus(), FormField::Name);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = BookingForm::new("garden");
        form.focus_next();
        for c in "a@b.c".chars() {
            form.insert_char(c);
        }
        form.backspace();
        assert_eq!(form.value(FormField::Email), "a@b.");
        assert_eq!(form.value(FormField::Name), "");
    }

    #[test]
    fn test_submit_success() {
        let mut form = filled();
        let summary = form.submit(&villa()).unwrap();
        assert_eq!(summary.quote.total, Some(600.0));
        assert!(form.error.is_none());
    }

    #[test]
    fn test_bad_date_is_reported() {
        let mut form = filled();
        form.set_value(FormField::CheckIn, "July 1st");
        let err = form.submit(&villa()).unwrap_err();
        assert!(matches!(err, BookingError::Unparsable { field: "check-in", .. }));
        assert!(form.error.is_some());
        assert!(form.summary.is_none());
    }

    #[test]
    fn test_too_many_guests() {
        let mut form = filled();
        form.set_value(FormField::Guests, "9");
        assert!(matches!(
            form.submit(&villa()),
            Err(BookingError::GuestCount { requested: 9, max: 3 })
        ));
    }
}
