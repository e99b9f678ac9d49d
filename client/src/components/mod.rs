//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, catalogue cards, and the enquiry forms
//! while reading/writing shared state from Leptos context providers.

pub mod banquet_form;
pub mod carousel;
pub mod contact_form;
pub mod footer;
pub mod form_status;
pub mod hero;
pub mod modal;
pub mod navbar;
pub mod room_booking_form;
pub mod room_card;
