//! Banquet / event enquiry form.

use enquiries::{BanquetEnquiry, Enquiry};
use leptos::prelude::*;

use crate::components::form_status::{FormStatus, FormStatusLine};

const EVENT_TYPES: [&str; 5] = [
    "Wedding reception",
    "Engagement",
    "Corporate event",
    "Birthday",
    "Other celebration",
];

#[component]
pub fn BanquetForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let event_type = RwSignal::new(EVENT_TYPES[0].to_owned());
    let event_date = RwSignal::new(String::new());
    let guests = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_sending() {
            return;
        }
        let enquiry = BanquetEnquiry {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            event_type: event_type.get(),
            event_date: event_date.get(),
            guests: guests.get(),
            message: message.get(),
        };
        let missing = enquiry.missing_fields();
        if !missing.is_empty() {
            status.set(FormStatus::Error(format!("Please fill in: {}", missing.join(", "))));
            return;
        }
        status.set(FormStatus::Sending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_banquet_enquiry(&enquiry).await {
                Ok(reply) if reply.success => status.set(FormStatus::Sent(reply.message)),
                Ok(reply) => status.set(FormStatus::Error(reply.message)),
                Err(e) => status.set(FormStatus::Error(e)),
            }
        });
    };

    view! {
        <form class="enquiry-form" on:submit=on_submit>
            <label class="enquiry-form__field">
                "Name"
                <input
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="enquiry-form__field">
                "Email"
                <input
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="enquiry-form__field">
                "Phone"
                <input
                    type="tel"
                    placeholder="Contact number"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <label class="enquiry-form__field">
                "Event"
                <select
                    prop:value=move || event_type.get()
                    on:change=move |ev| event_type.set(event_target_value(&ev))
                >
                    {EVENT_TYPES
                        .into_iter()
                        .map(|event| view! { <option value=event>{event}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="enquiry-form__field">
                "Date"
                <input
                    type="date"
                    prop:value=move || event_date.get()
                    on:input=move |ev| event_date.set(event_target_value(&ev))
                />
            </label>
            <label class="enquiry-form__field">
                "Guests"
                <input
                    type="number"
                    min="10"
                    max="600"
                    placeholder="Expected guests"
                    prop:value=move || guests.get()
                    on:input=move |ev| guests.set(event_target_value(&ev))
                />
            </label>
            <label class="enquiry-form__field enquiry-form__field--wide">
                "Tell us about the event (optional)"
                <textarea
                    rows="4"
                    placeholder="Menus, decor, timings..."
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="button button--primary" type="submit" disabled=move || status.get().is_sending()>
                "Send Event Enquiry"
            </button>
            <FormStatusLine status=status />
        </form>
    }
}
