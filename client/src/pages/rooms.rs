//! Rooms & suites page with the booking modal.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::modal::Modal;
use crate::components::room_booking_form::RoomBookingForm;
use crate::components::room_card::RoomCard;
use crate::state::ui::UiState;

/// One bookable room type in the catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomType {
    pub name: &'static str,
    pub blurb: &'static str,
    pub rate: &'static str,
    pub sleeps: &'static str,
    pub image: &'static str,
}

/// The room catalogue, in display order.
#[must_use]
pub fn room_catalogue() -> Vec<RoomType> {
    vec![
        RoomType {
            name: "Courtyard Room",
            blurb: "Opens onto the inner courtyard, with a writing desk and a rain shower. Our quietest category.",
            rate: "\u{20b9}7,500",
            sleeps: "Sleeps 2",
            image: "/assets/img/rooms/courtyard.jpg",
        },
        RoomType {
            name: "Garden Suite",
            blurb: "A separate sitting room and a private verandah over the herb garden.",
            rate: "\u{20b9}11,000",
            sleeps: "Sleeps 3",
            image: "/assets/img/rooms/garden-suite.jpg",
        },
        RoomType {
            name: "Deluxe King",
            blurb: "High ceilings, a four-poster king bed, and evening turndown with cedar oil.",
            rate: "\u{20b9}9,200",
            sleeps: "Sleeps 2",
            image: "/assets/img/rooms/deluxe-king.jpg",
        },
        RoomType {
            name: "Cedar Residence",
            blurb: "The whole top floor: two bedrooms, a dining room, and the best sunset on the lane.",
            rate: "\u{20b9}19,500",
            sleeps: "Sleeps 5",
            image: "/assets/img/rooms/residence.jpg",
        },
    ]
}

#[component]
pub fn RoomsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    Effect::new(move |_: Option<()>| crate::util::reveal::observe_reveals());

    let booking_open = Signal::derive(move || ui.get().booking_open());
    let on_close = Callback::new(move |()| ui.update(UiState::close_booking));
    let on_enquire = Callback::new(move |room: &'static str| ui.update(|s| s.open_booking(room)));

    view! {
        <Hero
            title="Rooms & Suites"
            subtitle="Eleven rooms across a restored spice-trader's house."
            image="/assets/img/rooms/hero.jpg"
        />
        <section class="rooms">
            <div class="rooms__grid">
                {room_catalogue()
                    .into_iter()
                    .map(|room| view! { <RoomCard room=room on_enquire=on_enquire /> })
                    .collect_view()}
            </div>
            <p class="rooms__note reveal">
                "Rates include breakfast in the courtyard and taxes. Children under six stay free."
            </p>
        </section>
        <Modal title="Book a room" open=booking_open on_close=on_close>
            {move || {
                ui.get()
                    .booking_room
                    .map(|room| view! { <RoomBookingForm preselected=room /> })
            }}
        </Modal>
    }
}
