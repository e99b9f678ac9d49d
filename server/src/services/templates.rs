//! Enquiry notification email bodies.
//!
//! Templates are compiled in via `include_str!` and filled by plain
//! placeholder substitution. Every user-supplied value is HTML-escaped
//! before it reaches a template.

use enquiries::{BanquetEnquiry, ContactEnquiry, RoomEnquiry, display_date};

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_enquiry.html");
const ROOM_TEMPLATE: &str = include_str!("../../templates/room_enquiry.html");
const BANQUET_TEMPLATE: &str = include_str!("../../templates/banquet_enquiry.html");

#[must_use]
pub fn render_contact(enquiry: &ContactEnquiry) -> String {
    CONTACT_TEMPLATE
        .replace("{{NAME}}", &escape_html(enquiry.name.trim()))
        .replace("{{EMAIL}}", &escape_html(enquiry.email.trim()))
        .replace("{{PHONE}}", &escape_html(enquiry.phone.trim()))
        .replace("{{MESSAGE}}", &escape_html(enquiry.message.trim()))
}

#[must_use]
pub fn render_room(enquiry: &RoomEnquiry) -> String {
    ROOM_TEMPLATE
        .replace("{{NAME}}", &escape_html(enquiry.name.trim()))
        .replace("{{EMAIL}}", &escape_html(enquiry.email.trim()))
        .replace("{{PHONE}}", &escape_html(enquiry.phone.trim()))
        .replace("{{ROOM_TYPE}}", &escape_html(enquiry.room_type.trim()))
        .replace("{{CHECK_IN}}", &escape_html(&display_date(&enquiry.check_in)))
        .replace("{{CHECK_OUT}}", &escape_html(&display_date(&enquiry.check_out)))
        .replace("{{GUESTS}}", &escape_html(enquiry.guests.trim()))
        .replace("{{MESSAGE}}", &escape_html(&or_none(&enquiry.message)))
}

#[must_use]
pub fn render_banquet(enquiry: &BanquetEnquiry) -> String {
    BANQUET_TEMPLATE
        .replace("{{NAME}}", &escape_html(enquiry.name.trim()))
        .replace("{{EMAIL}}", &escape_html(enquiry.email.trim()))
        .replace("{{PHONE}}", &escape_html(enquiry.phone.trim()))
        .replace("{{EVENT_TYPE}}", &escape_html(enquiry.event_type.trim()))
        .replace("{{EVENT_DATE}}", &escape_html(&display_date(&enquiry.event_date)))
        .replace("{{GUESTS}}", &escape_html(enquiry.guests.trim()))
        .replace("{{MESSAGE}}", &escape_html(&or_none(&enquiry.message)))
}

fn or_none(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { "(none)".to_owned() } else { trimmed.to_owned() }
}

/// Minimal HTML entity escaping for values interpolated into templates.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "templates_test.rs"]
mod tests;
