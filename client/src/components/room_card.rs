//! Catalogue card for one room type.

use leptos::prelude::*;

use crate::pages::rooms::RoomType;

#[component]
pub fn RoomCard(
    room: RoomType,
    /// Called with the room name when the visitor clicks enquire.
    on_enquire: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <article class="room-card reveal">
            <img class="room-card__photo" src=room.image alt=room.name loading="lazy" />
            <div class="room-card__body">
                <h3 class="room-card__name">{room.name}</h3>
                <p class="room-card__meta">{room.sleeps} " · from " {room.rate} " per night"</p>
                <p class="room-card__blurb">{room.blurb}</p>
                <button class="button button--outline" on:click=move |_| on_enquire.run(room.name)>
                    "Enquire"
                </button>
            </div>
        </article>
    }
}
