//! Networking for the enquiry relay API.

pub mod api;
