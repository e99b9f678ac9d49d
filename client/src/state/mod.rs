//! Client-side state shared through Leptos context providers.

pub mod ui;
