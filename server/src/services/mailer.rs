//! Outbound email delivery for enquiry notifications.
//!
//! The `Mailer` trait keeps the provider behind the relay pipeline so the
//! pipeline can run against mocks. The production impl wraps the Resend
//! API; configuration comes from `RESEND_API_KEY`, `ENQUIRY_EMAIL_FROM`,
//! and `ENQUIRY_EMAIL_TO`.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("missing env var {var}")]
    MissingConfig { var: String },
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// A rendered notification email, ready for the enquiries inbox.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub subject: String,
    pub html: String,
}

#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

// =============================================================================
// RESEND IMPL
// =============================================================================

pub struct ResendMailer {
    api_key: String,
    from: String,
    to: String,
}

impl ResendMailer {
    /// Build the mailer from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing or blank variable.
    pub fn from_env() -> Result<Self, MailError> {
        Ok(Self {
            api_key: require_env("RESEND_API_KEY")?,
            from: require_env("ENQUIRY_EMAIL_FROM")?,
            to: require_env("ENQUIRY_EMAIL_TO")?,
        })
    }

    /// The configured enquiries inbox address.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let resend = Resend::new(&self.api_key);
        let to = [self.to.as_str()];
        let options =
            CreateEmailBaseOptions::new(self.from.as_str(), to, email.subject.as_str()).with_html(&email.html);
        resend
            .emails
            .send(options)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }
}

pub(crate) fn require_env(var: &str) -> Result<String, MailError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MailError::MissingConfig { var: var.to_owned() }),
    }
}

#[cfg(test)]
#[path = "mailer_test.rs"]
mod tests;
