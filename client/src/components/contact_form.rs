//! General contact form.

use enquiries::{ContactEnquiry, Enquiry};
use leptos::prelude::*;

use crate::components::form_status::{FormStatus, FormStatusLine};

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_sending() {
            return;
        }
        let enquiry = ContactEnquiry {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
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
            match crate::net::api::submit_contact_enquiry(&enquiry).await {
                Ok(reply) if reply.success => {
                    status.set(FormStatus::Sent(reply.message));
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                }
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
            <label class="enquiry-form__field enquiry-form__field--wide">
                "Message"
                <textarea
                    rows="5"
                    placeholder="How can we help?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="button button--primary" type="submit" disabled=move || status.get().is_sending()>
                "Send Message"
            </button>
            <FormStatusLine status=status />
        </form>
    }
}
