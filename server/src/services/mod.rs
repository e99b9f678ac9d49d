//! Domain services used by the relay routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the outbound delivery paths and the relay pipeline
//! so route handlers can stay focused on protocol translation.

pub mod mailer;
pub mod relay;
pub mod sheets;
pub mod templates;
