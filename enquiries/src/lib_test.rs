use super::*;

fn full_room_enquiry() -> RoomEnquiry {
    RoomEnquiry {
        name: "Asha Verma".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "+91 98200 12345".to_owned(),
        room_type: "Deluxe King".to_owned(),
        check_in: "2026-08-04".to_owned(),
        check_out: "2026-08-07".to_owned(),
        guests: "2".to_owned(),
        message: String::new(),
    }
}

// =============================================================================
// missing_fields
// =============================================================================

#[test]
fn contact_all_fields_required() {
    let enquiry = ContactEnquiry::default();
    assert_eq!(enquiry.missing_fields(), vec!["name", "email", "phone", "message"]);
}

#[test]
fn contact_complete_payload_passes() {
    let enquiry = ContactEnquiry {
        name: "Ravi".to_owned(),
        email: "ravi@example.com".to_owned(),
        phone: "98200 00000".to_owned(),
        message: "Do you allow pets?".to_owned(),
    };
    assert!(enquiry.missing_fields().is_empty());
}

#[test]
fn whitespace_only_counts_as_missing() {
    let enquiry = ContactEnquiry {
        name: "   ".to_owned(),
        email: "ravi@example.com".to_owned(),
        phone: "98200 00000".to_owned(),
        message: "\t\n".to_owned(),
    };
    assert_eq!(enquiry.missing_fields(), vec!["name", "message"]);
}

#[test]
fn malformed_email_reported_as_email() {
    let mut enquiry = full_room_enquiry();
    enquiry.email = "not-an-address".to_owned();
    assert_eq!(enquiry.missing_fields(), vec!["email"]);
}

#[test]
fn room_message_is_optional() {
    let enquiry = full_room_enquiry();
    assert!(enquiry.message.is_empty());
    assert!(enquiry.missing_fields().is_empty());
}

#[test]
fn room_requires_stay_details() {
    let enquiry = RoomEnquiry {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: "98200 12345".to_owned(),
        ..RoomEnquiry::default()
    };
    assert_eq!(enquiry.missing_fields(), vec!["room_type", "check_in", "check_out", "guests"]);
}

#[test]
fn banquet_requires_event_details() {
    let enquiry = BanquetEnquiry {
        name: "Meera".to_owned(),
        email: "meera@example.com".to_owned(),
        phone: "98200 54321".to_owned(),
        event_type: "Wedding reception".to_owned(),
        event_date: "2026-11-21".to_owned(),
        guests: "180".to_owned(),
        message: String::new(),
    };
    assert!(enquiry.missing_fields().is_empty());

    let bare = BanquetEnquiry::default();
    assert_eq!(
        bare.missing_fields(),
        vec!["name", "email", "phone", "event_type", "event_date", "guests"]
    );
}

// =============================================================================
// serde defaults — absent keys must deserialize, not error
// =============================================================================

#[test]
fn absent_keys_deserialize_to_empty_strings() {
    let enquiry: RoomEnquiry = serde_json::from_str(r#"{"name":"Asha"}"#).unwrap();
    assert_eq!(enquiry.name, "Asha");
    assert!(enquiry.email.is_empty());
    assert!(enquiry.check_in.is_empty());
    assert!(!enquiry.missing_fields().is_empty());
}

#[test]
fn relay_response_wire_shape() {
    let json = serde_json::to_value(RelayResponse::ok("sent")).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true, "message": "sent" }));

    let parsed: RelayResponse = serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
    assert_eq!(parsed, RelayResponse::failed("nope"));
}

#[test]
fn enquiry_kind_serializes_lowercase() {
    assert_eq!(serde_json::to_value(EnquiryKind::Banquet).unwrap(), serde_json::json!("banquet"));
    assert_eq!(EnquiryKind::Room.as_str(), "room");
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Asha@Example.COM "), Some("asha@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_bad_shapes() {
    for bad in ["", "   ", "no-at-sign", "@example.com", "asha@", "a@b@c"] {
        assert_eq!(normalize_email(bad), None, "expected rejection for {bad:?}");
    }
}

// =============================================================================
// display_date
// =============================================================================

#[test]
fn display_date_renders_iso_dates() {
    assert_eq!(display_date("2026-08-04"), "04 Aug 2026");
    assert_eq!(display_date(" 2026-12-25 "), "25 Dec 2026");
}

#[test]
fn display_date_passes_through_unparseable_input() {
    assert_eq!(display_date("next tuesday"), "next tuesday");
    assert_eq!(display_date("04/08/2026"), "04/08/2026");
    assert_eq!(display_date(""), "");
}

// =============================================================================
// fields — sheet row projection
// =============================================================================

#[test]
fn room_fields_format_dates_for_display() {
    let fields = full_room_enquiry().fields();
    let check_in = fields.iter().find(|(label, _)| *label == "Check-in").unwrap();
    assert_eq!(check_in.1, "04 Aug 2026");
    assert_eq!(fields[0], ("Name", "Asha Verma".to_owned()));
}

#[test]
fn fields_trim_surrounding_whitespace() {
    let enquiry = ContactEnquiry {
        name: "  Ravi  ".to_owned(),
        email: "ravi@example.com".to_owned(),
        phone: " 98200 00000 ".to_owned(),
        message: " hello ".to_owned(),
    };
    let fields = enquiry.fields();
    assert_eq!(fields[0].1, "Ravi");
    assert_eq!(fields[2].1, "98200 00000");
    assert_eq!(fields[3].1, "hello");
}
