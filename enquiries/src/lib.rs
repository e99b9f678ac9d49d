//! Shared enquiry model for the Cedar Court site.
//!
//! This crate owns the payload types the browser forms submit and the relay
//! endpoints validate. Both `server` and `client` depend on it so the two
//! sides enforce the same required-field rules and speak the same wire
//! envelope.

use serde::{Deserialize, Serialize};
use time::macros::format_description;

// =============================================================================
// WIRE ENVELOPE
// =============================================================================

/// Response body returned by every relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
}

impl RelayResponse {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

// =============================================================================
// ENQUIRY KIND
// =============================================================================

/// Which form produced an enquiry. Doubles as the sheet selector forwarded
/// to the spreadsheet endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnquiryKind {
    Contact,
    Room,
    Banquet,
}

impl EnquiryKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Room => "room",
            Self::Banquet => "banquet",
        }
    }

    /// Subject line for the staff notification email.
    #[must_use]
    pub fn email_subject(self) -> &'static str {
        match self {
            Self::Contact => "New contact enquiry — Cedar Court",
            Self::Room => "New room booking enquiry — Cedar Court",
            Self::Banquet => "New banquet enquiry — Cedar Court",
        }
    }

    /// Confirmation message shown to the visitor on full success.
    #[must_use]
    pub fn confirmation(self) -> &'static str {
        match self {
            Self::Contact => "Thank you for getting in touch. We will reply shortly.",
            Self::Room => "Your booking enquiry has been sent. Our reservations team will confirm availability shortly.",
            Self::Banquet => "Your event enquiry has been sent. Our banquet team will be in touch shortly.",
        }
    }
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// General contact form payload.
///
/// All fields default to empty strings so a body with absent keys still
/// deserializes; [`Enquiry::missing_fields`] is what rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Room booking enquiry payload. `message` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub message: String,
}

/// Banquet / event enquiry payload. `message` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BanquetEnquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: String,
    pub guests: String,
    pub message: String,
}

// =============================================================================
// ENQUIRY TRAIT
// =============================================================================

/// Common surface the relay pipeline needs from every form payload.
pub trait Enquiry {
    fn kind(&self) -> EnquiryKind;

    /// Names of required fields that are absent, blank, or (for `email`)
    /// malformed. Empty means the payload is acceptable.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Ordered label/value pairs forwarded as the spreadsheet row. Dates
    /// are already in display form.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl Enquiry for ContactEnquiry {
    fn kind(&self) -> EnquiryKind {
        EnquiryKind::Contact
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        push_if_blank(&mut missing, "name", &self.name);
        push_if_bad_email(&mut missing, &self.email);
        push_if_blank(&mut missing, "phone", &self.phone);
        push_if_blank(&mut missing, "message", &self.message);
        missing
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.trim().to_owned()),
            ("Email", self.email.trim().to_owned()),
            ("Phone", self.phone.trim().to_owned()),
            ("Message", self.message.trim().to_owned()),
        ]
    }
}

impl Enquiry for RoomEnquiry {
    fn kind(&self) -> EnquiryKind {
        EnquiryKind::Room
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        push_if_blank(&mut missing, "name", &self.name);
        push_if_bad_email(&mut missing, &self.email);
        push_if_blank(&mut missing, "phone", &self.phone);
        push_if_blank(&mut missing, "room_type", &self.room_type);
        push_if_blank(&mut missing, "check_in", &self.check_in);
        push_if_blank(&mut missing, "check_out", &self.check_out);
        push_if_blank(&mut missing, "guests", &self.guests);
        missing
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.trim().to_owned()),
            ("Email", self.email.trim().to_owned()),
            ("Phone", self.phone.trim().to_owned()),
            ("Room", self.room_type.trim().to_owned()),
            ("Check-in", display_date(&self.check_in)),
            ("Check-out", display_date(&self.check_out)),
            ("Guests", self.guests.trim().to_owned()),
            ("Message", self.message.trim().to_owned()),
        ]
    }
}

impl Enquiry for BanquetEnquiry {
    fn kind(&self) -> EnquiryKind {
        EnquiryKind::Banquet
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        push_if_blank(&mut missing, "name", &self.name);
        push_if_bad_email(&mut missing, &self.email);
        push_if_blank(&mut missing, "phone", &self.phone);
        push_if_blank(&mut missing, "event_type", &self.event_type);
        push_if_blank(&mut missing, "event_date", &self.event_date);
        push_if_blank(&mut missing, "guests", &self.guests);
        missing
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.trim().to_owned()),
            ("Email", self.email.trim().to_owned()),
            ("Phone", self.phone.trim().to_owned()),
            ("Event", self.event_type.trim().to_owned()),
            ("Date", display_date(&self.event_date)),
            ("Guests", self.guests.trim().to_owned()),
            ("Message", self.message.trim().to_owned()),
        ]
    }
}

// =============================================================================
// VALIDATION HELPERS
// =============================================================================

fn push_if_blank(missing: &mut Vec<&'static str>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(field);
    }
}

fn push_if_bad_email(missing: &mut Vec<&'static str>, value: &str) {
    if normalize_email(value).is_none() {
        missing.push("email");
    }
}

/// Lowercase and trim an email address; `None` if it fails the minimal
/// shape check (exactly one `@`, non-empty local and domain parts).
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

// =============================================================================
// DATE DISPLAY
// =============================================================================

/// Render an ISO `YYYY-MM-DD` date as `04 Aug 2026` for email and sheet
/// display. Anything unparseable is returned verbatim — validation only
/// checks presence, never shape.
#[must_use]
pub fn display_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let iso = format_description!("[year]-[month]-[day]");
    let display = format_description!("[day] [month repr:short] [year]");
    match time::Date::parse(trimmed, &iso) {
        Ok(date) => date.format(&display).unwrap_or_else(|_| trimmed.to_owned()),
        Err(_) => trimmed.to_owned(),
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
