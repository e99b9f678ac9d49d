use std::sync::Arc;

use crate::routes::api_routes;
use crate::services::mailer::{MailError, Mailer, OutboundEmail};
use crate::services::sheets::{SheetError, SheetWriter};
use crate::state::test_helpers;
use enquiries::{EnquiryKind, RelayResponse};

// =============================================================================
// Always-succeeding delivery paths; outbound behavior itself is covered by
// the relay and sheets tests.
// =============================================================================

struct OkMailer;

#[async_trait::async_trait]
impl Mailer for OkMailer {
    async fn send(&self, _email: &OutboundEmail) -> Result<(), MailError> {
        Ok(())
    }
}

struct OkSheet;

#[async_trait::async_trait]
impl SheetWriter for OkSheet {
    async fn append(&self, _kind: EnquiryKind, _fields: &[(&'static str, String)]) -> Result<(), SheetError> {
        Ok(())
    }
}

/// Serve the relay API on an ephemeral port and return its base URL.
async fn spawn_api() -> String {
    let state = test_helpers::state_with(Some(Arc::new(OkMailer)), Some(Arc::new(OkSheet)));
    let app = api_routes(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn valid_contact_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Ravi Nair",
        "email": "ravi@example.com",
        "phone": "98200 00000",
        "message": "Is breakfast included?"
    })
}

// =============================================================================
// Contract: 200 on well-formed submissions
// =============================================================================

#[tokio::test]
async fn well_formed_contact_post_returns_success() {
    let base = spawn_api().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/enquiries/contact"))
        .json(&valid_contact_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: RelayResponse = response.json().await.unwrap();
    assert!(body.success);
    assert_eq!(body.message, EnquiryKind::Contact.confirmation());
}

#[tokio::test]
async fn well_formed_room_post_returns_success() {
    let base = spawn_api().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/enquiries/room"))
        .json(&serde_json::json!({
            "name": "Asha Verma",
            "email": "asha@example.com",
            "phone": "98200 12345",
            "room_type": "Garden Suite",
            "check_in": "2026-08-04",
            "check_out": "2026-08-07",
            "guests": "2"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: RelayResponse = response.json().await.unwrap();
    assert!(body.success);
}

// =============================================================================
// Contract: 400 lists missing fields
// =============================================================================

#[tokio::test]
async fn missing_fields_return_400_listing_them() {
    let base = spawn_api().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/enquiries/banquet"))
        .json(&serde_json::json!({ "name": "Meera" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: RelayResponse = response.json().await.unwrap();
    assert!(!body.success);
    for field in ["email", "phone", "event_type", "event_date", "guests"] {
        assert!(body.message.contains(field), "missing {field} in: {}", body.message);
    }
}

#[tokio::test]
async fn malformed_json_returns_400_with_envelope() {
    let base = spawn_api().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/enquiries/contact"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: RelayResponse = response.json().await.unwrap();
    assert!(!body.success);
}

// =============================================================================
// Contract: OPTIONS preflight and method filtering
// =============================================================================

#[tokio::test]
async fn options_preflight_gets_permissive_cors() {
    let base = spawn_api().await;
    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{base}/api/enquiries/contact"))
        .header("Origin", "https://cedarcourt.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_eq!(allow_origin, Some("*"));
}

#[tokio::test]
async fn cross_origin_post_carries_cors_header() {
    let base = spawn_api().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/enquiries/contact"))
        .header("Origin", "https://cedarcourt.example")
        .json(&valid_contact_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn non_post_method_returns_405() {
    let base = spawn_api().await;
    let client = reqwest::Client::new();

    let get = client
        .get(format!("{base}/api/enquiries/contact"))
        .send()
        .await
        .unwrap();
    assert_eq!(get.status(), 405);

    let delete = client
        .delete(format!("{base}/api/enquiries/room"))
        .send()
        .await
        .unwrap();
    assert_eq!(delete.status(), 405);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn healthz_returns_200() {
    let base = spawn_api().await;
    let response = reqwest::Client::new()
        .get(format!("{base}/healthz"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
