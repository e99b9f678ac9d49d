//! Banquets & events page.

#[cfg(test)]
#[path = "banquets_test.rs"]
mod banquets_test;

use leptos::prelude::*;

use crate::components::banquet_form::BanquetForm;
use crate::components::hero::Hero;

/// One event space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Venue {
    pub name: &'static str,
    pub capacity: u32,
    pub style: &'static str,
    pub blurb: &'static str,
}

/// Event spaces, largest first.
#[must_use]
pub fn banquet_venues() -> Vec<Venue> {
    vec![
        Venue {
            name: "Courtyard Lawn",
            capacity: 400,
            style: "Open air",
            blurb: "The full courtyard under string lights. Monsoon cover can be arranged.",
        },
        Venue {
            name: "The Cedar Hall",
            capacity: 250,
            style: "Banquet",
            blurb: "Our main hall, with the carved cedar ceiling the house is named for.",
        },
        Venue {
            name: "The Library",
            capacity: 40,
            style: "Boardroom",
            blurb: "A quiet panelled room for small dinners and meetings.",
        },
    ]
}

#[component]
pub fn BanquetsPage() -> impl IntoView {
    Effect::new(move |_: Option<()>| crate::util::reveal::observe_reveals());

    view! {
        <Hero
            title="Banquets & Events"
            subtitle="Weddings, receptions, and long dinners under the string lights."
            image="/assets/img/banquets/hero.jpg"
        />
        <section class="venues">
            {banquet_venues()
                .into_iter()
                .map(|venue| {
                    view! {
                        <article class="venue-card reveal">
                            <h3 class="venue-card__name">{venue.name}</h3>
                            <p class="venue-card__meta">{venue.style} " · up to " {venue.capacity} " guests"</p>
                            <p class="venue-card__blurb">{venue.blurb}</p>
                        </article>
                    }
                })
                .collect_view()}
        </section>
        <section class="banquet-enquiry reveal">
            <h2>"Tell us about your event"</h2>
            <p>"Share the date and a rough guest count; the banquet team replies with menus and a quote."</p>
            <BanquetForm />
        </section>
    }
}
