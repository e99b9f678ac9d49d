//! Site navigation bar with a mobile drawer.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;
use crate::util::nav::is_active;

const LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/rooms", "Rooms"),
    ("/banquets", "Banquets"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    // Memo is Copy, so each link closure can capture it independently.
    let pathname = use_location().pathname;

    let on_toggle = move |_| ui.update(UiState::toggle_nav);

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand" on:click=move |_| ui.update(UiState::close_nav)>
                <span class="navbar__brand-name">"Cedar Court"</span>
                <span class="navbar__brand-sub">"Hotel"</span>
            </A>
            <button
                class="navbar__toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || ui.get().nav_open.to_string()
                on:click=on_toggle
            >
                <span class="navbar__toggle-bar"></span>
                <span class="navbar__toggle-bar"></span>
                <span class="navbar__toggle-bar"></span>
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || ui.get().nav_open>
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        let link_class = move || {
                            if is_active(&pathname.get(), href) {
                                "navbar__link navbar__link--active"
                            } else {
                                "navbar__link"
                            }
                        };
                        view! {
                            <A href=href attr:class=link_class on:click=move |_| ui.update(UiState::close_nav)>
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
