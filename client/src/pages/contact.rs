//! Contact page — how to reach the hotel, plus the general enquiry form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;

#[component]
pub fn ContactPage() -> impl IntoView {
    Effect::new(move |_: Option<()>| crate::util::reveal::observe_reveals());

    view! {
        <Hero
            title="Contact"
            subtitle="The desk is staffed around the clock; the kettle is usually on."
            image="/assets/img/contact/hero.jpg"
        />
        <section class="contact">
            <div class="contact__details reveal">
                <h2>"Find us"</h2>
                <p>"Cedar Court Hotel"</p>
                <p>"14 Heritage Lane, Old Quarter"</p>
                <p>"Fort Kochi 682001"</p>
                <h2>"Call or write"</h2>
                <p>
                    <a href="tel:+914842215500">"+91 484 221 5500"</a>
                </p>
                <p>
                    <a href="mailto:stay@cedarcourt.example">"stay@cedarcourt.example"</a>
                </p>
                <p class="contact__hours">"Reservations desk: 8am to 10pm, every day."</p>
            </div>
            <div class="contact__form reveal">
                <h2>"Send a message"</h2>
                <ContactForm />
            </div>
        </section>
    }
}
