//! Room booking enquiry form, shown in the booking modal.

use enquiries::{Enquiry, RoomEnquiry};
use leptos::prelude::*;

use crate::components::form_status::{FormStatus, FormStatusLine};
use crate::pages::rooms::room_catalogue;

#[component]
pub fn RoomBookingForm(
    /// Room type the form opens preselected to.
    preselected: String,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let room_type = RwSignal::new(preselected);
    let check_in = RwSignal::new(String::new());
    let check_out = RwSignal::new(String::new());
    let guests = RwSignal::new("2".to_owned());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get().is_sending() {
            return;
        }
        let enquiry = RoomEnquiry {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            room_type: room_type.get(),
            check_in: check_in.get(),
            check_out: check_out.get(),
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
            match crate::net::api::submit_room_enquiry(&enquiry).await {
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
                "Room"
                <select
                    prop:value=move || room_type.get()
                    on:change=move |ev| room_type.set(event_target_value(&ev))
                >
                    {room_catalogue()
                        .into_iter()
                        .map(|room| view! { <option value=room.name>{room.name}</option> })
                        .collect_view()}
                </select>
            </label>
            <label class="enquiry-form__field">
                "Check-in"
                <input
                    type="date"
                    prop:value=move || check_in.get()
                    on:input=move |ev| check_in.set(event_target_value(&ev))
                />
            </label>
            <label class="enquiry-form__field">
                "Check-out"
                <input
                    type="date"
                    prop:value=move || check_out.get()
                    on:input=move |ev| check_out.set(event_target_value(&ev))
                />
            </label>
            <label class="enquiry-form__field">
                "Guests"
                <input
                    type="number"
                    min="1"
                    max="6"
                    prop:value=move || guests.get()
                    on:input=move |ev| guests.set(event_target_value(&ev))
                />
            </label>
            <label class="enquiry-form__field enquiry-form__field--wide">
                "Requests (optional)"
                <textarea
                    rows="3"
                    placeholder="Anything we should prepare?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="button button--primary" type="submit" disabled=move || status.get().is_sending()>
                "Send Booking Enquiry"
            </button>
            <FormStatusLine status=status />
        </form>
    }
}
