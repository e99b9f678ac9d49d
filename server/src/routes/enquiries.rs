//! Enquiry relay routes — one POST endpoint per form type.
//!
//! Every handler funnels into the same relay pipeline; the only per-form
//! differences are the payload type and its email template.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Json;
use enquiries::{BanquetEnquiry, ContactEnquiry, RelayResponse, RoomEnquiry};

use crate::services::{relay, templates};
use crate::state::AppState;

type RelayReply = (StatusCode, Json<RelayResponse>);

fn rejected_body(rejection: &JsonRejection) -> RelayReply {
    tracing::warn!(error = %rejection, "enquiry body rejected");
    (
        StatusCode::BAD_REQUEST,
        Json(RelayResponse::failed("Request body must be valid JSON.")),
    )
}

/// `POST /api/enquiries/contact` — relay a contact form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactEnquiry>, JsonRejection>,
) -> RelayReply {
    let Json(enquiry) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejected_body(&rejection),
    };
    let html = templates::render_contact(&enquiry);
    let (status, body) = relay::relay_enquiry(&state, &enquiry, html).await;
    (status, Json(body))
}

/// `POST /api/enquiries/room` — relay a room booking enquiry.
pub async fn submit_room(
    State(state): State<AppState>,
    payload: Result<Json<RoomEnquiry>, JsonRejection>,
) -> RelayReply {
    let Json(enquiry) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejected_body(&rejection),
    };
    let html = templates::render_room(&enquiry);
    let (status, body) = relay::relay_enquiry(&state, &enquiry, html).await;
    (status, Json(body))
}

/// `POST /api/enquiries/banquet` — relay a banquet / event enquiry.
pub async fn submit_banquet(
    State(state): State<AppState>,
    payload: Result<Json<BanquetEnquiry>, JsonRejection>,
) -> RelayReply {
    let Json(enquiry) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejected_body(&rejection),
    };
    let html = templates::render_banquet(&enquiry);
    let (status, body) = relay::relay_enquiry(&state, &enquiry, html).await;
    (status, Json(body))
}

#[cfg(test)]
#[path = "enquiries_test.rs"]
mod tests;
