//! The enquiry relay pipeline.
//!
//! DESIGN
//! ======
//! One parameterized sequence serves every form type: validate, then issue
//! the email send and the spreadsheet append concurrently and wait for
//! both. Nothing is retried. A lone failed path downgrades the response to
//! a soft success rather than losing the enquiry; only a total delivery
//! failure is reported as one.

use axum::http::StatusCode;
use enquiries::{Enquiry, EnquiryKind, RelayResponse};
use uuid::Uuid;

use crate::services::mailer::OutboundEmail;
use crate::state::AppState;

const TOTAL_FAILURE_MESSAGE: &str =
    "We could not process your enquiry right now. Please call the front desk directly.";
const EMAIL_FAILED_WARNING: &str =
    "Our notification email failed, so our reply may take a little longer.";
const SHEET_FAILED_WARNING: &str =
    "We could not record the enquiry in our log; please mention this enquiry if you call.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathStatus {
    Delivered,
    Failed,
    Unconfigured,
}

/// Run an enquiry through the relay and produce the HTTP reply parts.
///
/// `html` is the pre-rendered notification email body for this enquiry.
pub async fn relay_enquiry(state: &AppState, enquiry: &impl Enquiry, html: String) -> (StatusCode, RelayResponse) {
    let kind = enquiry.kind();

    let missing = enquiry.missing_fields();
    if !missing.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            RelayResponse::failed(format!("Missing or invalid fields: {}", missing.join(", "))),
        );
    }

    let enquiry_id = Uuid::new_v4();
    let email = OutboundEmail { subject: kind.email_subject().to_owned(), html };
    let fields = enquiry.fields();

    let (email_status, sheet_status) = tokio::join!(
        async {
            match &state.mailer {
                Some(mailer) => match mailer.send(&email).await {
                    Ok(()) => PathStatus::Delivered,
                    Err(e) => {
                        tracing::error!(%enquiry_id, kind = kind.as_str(), error = %e, "email delivery failed");
                        PathStatus::Failed
                    }
                },
                None => PathStatus::Unconfigured,
            }
        },
        async {
            match &state.sheets {
                Some(sheets) => match sheets.append(kind, &fields).await {
                    Ok(()) => PathStatus::Delivered,
                    Err(e) => {
                        tracing::error!(%enquiry_id, kind = kind.as_str(), error = %e, "sheet append failed");
                        PathStatus::Failed
                    }
                },
                None => PathStatus::Unconfigured,
            }
        },
    );

    let (status, response) = compose_outcome(kind, email_status, sheet_status);
    if response.success {
        tracing::info!(%enquiry_id, kind = kind.as_str(), "enquiry relayed");
    }
    (status, response)
}

/// Fold the two path outcomes into the wire reply. At least one delivered
/// path means the enquiry reached staff and the visitor gets a success.
fn compose_outcome(kind: EnquiryKind, email: PathStatus, sheet: PathStatus) -> (StatusCode, RelayResponse) {
    let delivered = [email, sheet]
        .iter()
        .filter(|s| **s == PathStatus::Delivered)
        .count();
    if delivered == 0 {
        return (StatusCode::INTERNAL_SERVER_ERROR, RelayResponse::failed(TOTAL_FAILURE_MESSAGE));
    }

    let mut message = kind.confirmation().to_owned();
    if email == PathStatus::Failed {
        message.push(' ');
        message.push_str(EMAIL_FAILED_WARNING);
    }
    if sheet == PathStatus::Failed {
        message.push(' ');
        message.push_str(SHEET_FAILED_WARNING);
    }
    (StatusCode::OK, RelayResponse::ok(message))
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
