use super::*;
use httpmock::prelude::*;

fn sample_fields() -> Vec<(&'static str, String)> {
    vec![
        ("Name", "Asha Verma".to_owned()),
        ("Email", "asha@example.com".to_owned()),
        ("Phone", "+91 98200 12345".to_owned()),
        ("Message", "Late checkout possible?".to_owned()),
    ]
}

fn writer_for(primary: String, fallback: Option<String>) -> ScriptSheetWriter {
    ScriptSheetWriter::new(primary, fallback, 5).expect("client build")
}

// =============================================================================
// append — primary / fallback behavior
// =============================================================================

#[tokio::test]
async fn append_posts_row_to_primary() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .json_body_partial(r#"{ "sheet": "contact", "rows": { "Name": "Asha Verma" } }"#);
        then.status(200).body("ok");
    });

    let writer = writer_for(server.url("/exec"), None);
    let result = writer.append(EnquiryKind::Contact, &sample_fields()).await;

    assert!(result.is_ok());
    mock.assert();
}

#[tokio::test]
async fn append_falls_back_when_primary_fails() {
    let server = MockServer::start();
    let primary = server.mock(|when, then| {
        when.method(POST).path("/primary");
        then.status(500);
    });
    let fallback = server.mock(|when, then| {
        when.method(POST).path("/fallback");
        then.status(200);
    });

    let writer = writer_for(server.url("/primary"), Some(server.url("/fallback")));
    let result = writer.append(EnquiryKind::Room, &sample_fields()).await;

    assert!(result.is_ok());
    primary.assert();
    fallback.assert();
}

#[tokio::test]
async fn append_without_fallback_reports_primary_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(502);
    });

    let writer = writer_for(server.url("/exec"), None);
    let err = writer
        .append(EnquiryKind::Banquet, &sample_fields())
        .await
        .unwrap_err();

    assert!(matches!(err, SheetError::Response { status: 502 }));
}

#[tokio::test]
async fn append_reports_fallback_error_when_both_fail() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/primary");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(POST).path("/fallback");
        then.status(403);
    });

    let writer = writer_for(server.url("/primary"), Some(server.url("/fallback")));
    let err = writer
        .append(EnquiryKind::Contact, &sample_fields())
        .await
        .unwrap_err();

    assert!(matches!(err, SheetError::Response { status: 403 }));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_request_error() {
    // Port 9 (discard) is assumed closed; connection is refused immediately.
    let writer = writer_for("http://127.0.0.1:9/exec".to_owned(), None);
    let err = writer
        .append(EnquiryKind::Contact, &sample_fields())
        .await
        .unwrap_err();
    assert!(matches!(err, SheetError::Request(_) | SheetError::Timeout { .. }));
}

// =============================================================================
// row_body
// =============================================================================

#[test]
fn row_body_carries_sheet_selector_and_rows() {
    let body = row_body(EnquiryKind::Banquet, &sample_fields());
    assert_eq!(body["sheet"], "banquet");
    assert_eq!(body["rows"]["Email"], "asha@example.com");
    assert!(body["submitted_at"].as_str().is_some_and(|s| s.contains('T')));
}

#[test]
fn row_body_preserves_every_field() {
    let fields = sample_fields();
    let body = row_body(EnquiryKind::Contact, &fields);
    let rows = body["rows"].as_object().unwrap();
    assert_eq!(rows.len(), fields.len());
    for (label, value) in &fields {
        assert_eq!(rows[*label], *value);
    }
}

// =============================================================================
// env_parse_u64 — unique env var names to avoid parallel test races
// =============================================================================

#[test]
fn env_parse_u64_reads_valid_value() {
    let key = "__TEST_SHEETS_TIMEOUT_201__";
    unsafe { std::env::set_var(key, "25") };
    assert_eq!(env_parse_u64(key, 10), 25);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_falls_back_on_garbage() {
    let key = "__TEST_SHEETS_TIMEOUT_202__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse_u64(key, 10), 10);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_falls_back_when_unset() {
    assert_eq!(env_parse_u64("__TEST_SHEETS_SURELY_UNSET_203__", 7), 7);
}
