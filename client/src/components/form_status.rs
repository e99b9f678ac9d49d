//! Shared submission status line for the enquiry forms.

#[cfg(test)]
#[path = "form_status_test.rs"]
mod form_status_test;

use leptos::prelude::*;

/// Lifecycle of one form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent(String),
    Error(String),
}

impl FormStatus {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    /// CSS modifier and text for the status line; `None` while idle.
    #[must_use]
    pub fn line(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(("sending", "Sending your enquiry...".to_owned())),
            Self::Sent(message) => Some(("success", message.clone())),
            Self::Error(message) => Some(("error", message.clone())),
        }
    }
}

#[component]
pub fn FormStatusLine(status: RwSignal<FormStatus>) -> impl IntoView {
    view! {
        {move || {
            status
                .get()
                .line()
                .map(|(modifier, text)| {
                    view! { <p class=format!("form-status form-status--{modifier}")>{text}</p> }
                })
        }}
    }
}
