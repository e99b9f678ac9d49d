//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <h3>"Cedar Court Hotel"</h3>
                    <p>"14 Heritage Lane, Old Quarter"</p>
                    <p>"Fort Kochi 682001"</p>
                </div>
                <div class="footer__column">
                    <h3>"Reservations"</h3>
                    <p>
                        <a href="tel:+914842215500">"+91 484 221 5500"</a>
                    </p>
                    <p>
                        <a href="mailto:stay@cedarcourt.example">"stay@cedarcourt.example"</a>
                    </p>
                </div>
                <div class="footer__column">
                    <h3>"Explore"</h3>
                    <p>
                        <A href="/rooms">"Rooms & Suites"</A>
                    </p>
                    <p>
                        <A href="/banquets">"Banquets & Events"</A>
                    </p>
                    <p>
                        <A href="/contact">"Contact"</A>
                    </p>
                </div>
            </div>
            <p class="footer__note">"Cedar Court Hotel. All rights reserved."</p>
        </footer>
    }
}
