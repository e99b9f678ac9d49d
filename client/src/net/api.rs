//! REST helpers for submitting enquiries to the relay API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since form submission is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<RelayResponse, String>`; a 400 still parses into the
//! relay envelope so the form can show the server's field list verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use enquiries::{BanquetEnquiry, ContactEnquiry, EnquiryKind, RelayResponse, RoomEnquiry};
#[cfg(feature = "hydrate")]
use serde::Serialize;

#[cfg(any(test, feature = "hydrate"))]
fn enquiry_endpoint(kind: EnquiryKind) -> String {
    format!("/api/enquiries/{}", kind.as_str())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("enquiry request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn post_enquiry<T: Serialize>(kind: EnquiryKind, enquiry: &T) -> Result<RelayResponse, String> {
    let response = gloo_net::http::Request::post(&enquiry_endpoint(kind))
        .json(enquiry)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    // Relay errors (400/500) still carry the envelope; anything else is a
    // transport-level failure.
    match response.json::<RelayResponse>().await {
        Ok(body) => Ok(body),
        Err(_) => Err(request_failed_message(response.status())),
    }
}

/// Submit a contact form payload to `POST /api/enquiries/contact`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the response
/// is not a relay envelope.
pub async fn submit_contact_enquiry(enquiry: &ContactEnquiry) -> Result<RelayResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_enquiry(EnquiryKind::Contact, enquiry).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enquiry;
        Err("enquiry submission requires a browser".to_owned())
    }
}

/// Submit a room booking payload to `POST /api/enquiries/room`.
///
/// # Errors
///
/// Same contract as [`submit_contact_enquiry`].
pub async fn submit_room_enquiry(enquiry: &RoomEnquiry) -> Result<RelayResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_enquiry(EnquiryKind::Room, enquiry).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enquiry;
        Err("enquiry submission requires a browser".to_owned())
    }
}

/// Submit a banquet enquiry payload to `POST /api/enquiries/banquet`.
///
/// # Errors
///
/// Same contract as [`submit_contact_enquiry`].
pub async fn submit_banquet_enquiry(enquiry: &BanquetEnquiry) -> Result<RelayResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_enquiry(EnquiryKind::Banquet, enquiry).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enquiry;
        Err("enquiry submission requires a browser".to_owned())
    }
}
