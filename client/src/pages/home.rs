//! Landing page — hero, highlights, and the photo carousel.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::carousel::{Carousel, Slide};
use crate::components::hero::Hero;

const CAROUSEL_ADVANCE_MS: u32 = 6000;

/// Photos for the landing page carousel, in display order.
#[must_use]
pub fn gallery_slides() -> Vec<Slide> {
    vec![
        Slide {
            src: "/assets/img/gallery/courtyard-dusk.jpg",
            alt: "The inner courtyard at dusk",
            caption: "The courtyard at dusk",
        },
        Slide {
            src: "/assets/img/gallery/verandah-breakfast.jpg",
            alt: "Breakfast laid out on the verandah",
            caption: "Breakfast on the verandah",
        },
        Slide {
            src: "/assets/img/gallery/cedar-hall.jpg",
            alt: "The Cedar Hall set for a wedding",
            caption: "The Cedar Hall, set for a wedding",
        },
        Slide {
            src: "/assets/img/gallery/heritage-lane.jpg",
            alt: "Heritage Lane outside the hotel",
            caption: "Heritage Lane, right outside",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    Effect::new(move |_: Option<()>| crate::util::reveal::observe_reveals());

    view! {
        <Hero
            title="Cedar Court Hotel"
            subtitle="A restored spice-trader's house in the old quarter, eleven rooms and one long verandah."
            image="/assets/img/gallery/facade.jpg"
        >
            <A href="/rooms" attr:class="button button--primary">
                "Book a Stay"
            </A>
            <A href="/banquets" attr:class="button button--ghost">
                "Plan an Event"
            </A>
        </Hero>

        <section class="welcome reveal">
            <h2>"Welcome to the Court"</h2>
            <p>
                "Cedar Court has kept watch over Heritage Lane since 1894. We kept the teak "
                "staircases, the lime-plastered walls, and the habit of unhurried afternoons; "
                "everything else has been quietly brought up to date."
            </p>
        </section>

        <section class="highlights">
            <article class="highlight-card reveal">
                <h3>"Rooms & Suites"</h3>
                <p>"Eleven rooms around the courtyard, no two alike, all with the original teak floors."</p>
                <A href="/rooms" attr:class="text-link">
                    "See the rooms"
                </A>
            </article>
            <article class="highlight-card reveal">
                <h3>"The Verandah Table"</h3>
                <p>"Breakfast from the wood oven, and a short dinner menu that changes with the boats."</p>
                <A href="/contact" attr:class="text-link">
                    "Ask about dinner"
                </A>
            </article>
            <article class="highlight-card reveal">
                <h3>"Banquets & Events"</h3>
                <p>"The Cedar Hall and the courtyard lawn host weddings and gatherings up to four hundred."</p>
                <A href="/banquets" attr:class="text-link">
                    "Plan your event"
                </A>
            </article>
        </section>

        <section class="gallery reveal">
            <h2>"Around the House"</h2>
            <Carousel slides=gallery_slides() auto_advance_ms=Some(CAROUSEL_ADVANCE_MS) />
        </section>

        <section class="closing-cta reveal">
            <h2>"The lane is waiting"</h2>
            <p>"Write to us, or send a booking enquiry and the reservations desk will reply the same day."</p>
            <A href="/contact" attr:class="button button--primary">
                "Get in Touch"
            </A>
        </section>
    }
}
