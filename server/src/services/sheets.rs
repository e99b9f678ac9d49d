//! Spreadsheet relay — appends enquiry rows to the external scripting endpoint.
//!
//! The endpoint is an opaque collaborator: anything 2xx counts as written.
//! A primary and an optional fallback URL are tried in order; there are no
//! retries beyond that single fallback hop. Each call races a fixed
//! timeout so a wedged endpoint cannot stall the enquiry response.

use std::time::Duration;

use enquiries::EnquiryKind;
use time::format_description::well_known::Rfc3339;

const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 10;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("missing env var {var}")]
    MissingConfig { var: String },
    #[error("sheet request failed: {0}")]
    Request(String),
    #[error("sheet endpoint returned status {status}")]
    Response { status: u16 },
    #[error("sheet request timed out after {secs}s")]
    Timeout { secs: u64 },
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[async_trait::async_trait]
pub trait SheetWriter: Send + Sync {
    async fn append(&self, kind: EnquiryKind, fields: &[(&'static str, String)]) -> Result<(), SheetError>;
}

// =============================================================================
// SCRIPT ENDPOINT IMPL
// =============================================================================

pub struct ScriptSheetWriter {
    http: reqwest::Client,
    endpoint_url: String,
    fallback_url: Option<String>,
    timeout_secs: u64,
}

impl ScriptSheetWriter {
    /// Build the writer from environment variables.
    ///
    /// Required: `SHEETS_ENDPOINT_URL`. Optional: `SHEETS_FALLBACK_URL`,
    /// `RELAY_TIMEOUT_SECS` (default 10).
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL is absent or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, SheetError> {
        let endpoint_url = std::env::var("SHEETS_ENDPOINT_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(SheetError::MissingConfig { var: "SHEETS_ENDPOINT_URL".to_owned() })?;
        let fallback_url = std::env::var("SHEETS_FALLBACK_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());
        let timeout_secs = env_parse_u64("RELAY_TIMEOUT_SECS", DEFAULT_RELAY_TIMEOUT_SECS);
        Self::new(endpoint_url, fallback_url, timeout_secs)
    }

    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(endpoint_url: String, fallback_url: Option<String>, timeout_secs: u64) -> Result<Self, SheetError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| SheetError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint_url, fallback_url, timeout_secs })
    }

    async fn post_once(&self, url: &str, body: &serde_json::Value) -> Result<(), SheetError> {
        let send = self.http.post(url).json(body).send();
        let response = tokio::time::timeout(Duration::from_secs(self.timeout_secs), send)
            .await
            .map_err(|_| SheetError::Timeout { secs: self.timeout_secs })?
            .map_err(|e| SheetError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Response { status: status.as_u16() });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SheetWriter for ScriptSheetWriter {
    async fn append(&self, kind: EnquiryKind, fields: &[(&'static str, String)]) -> Result<(), SheetError> {
        let body = row_body(kind, fields);
        match self.post_once(&self.endpoint_url, &body).await {
            Ok(()) => Ok(()),
            Err(primary) => {
                let Some(fallback) = self.fallback_url.as_deref() else {
                    return Err(primary);
                };
                tracing::warn!(error = %primary, "primary sheet endpoint failed, trying fallback");
                self.post_once(fallback, &body).await
            }
        }
    }
}

/// Body posted to the scripting endpoint. The endpoint picks its sheet from
/// `sheet` and writes `rows` as one row; the shape beyond that is its
/// business.
pub(crate) fn row_body(kind: EnquiryKind, fields: &[(&'static str, String)]) -> serde_json::Value {
    let mut rows = serde_json::Map::new();
    for (label, value) in fields {
        rows.insert((*label).to_owned(), serde_json::Value::String(value.clone()));
    }
    let submitted_at = time::OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();
    serde_json::json!({
        "sheet": kind.as_str(),
        "submitted_at": submitted_at,
        "rows": rows,
    })
}

pub(crate) fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "sheets_test.rs"]
mod tests;
