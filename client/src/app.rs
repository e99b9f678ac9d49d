//! App shell, router, and page scaffolding.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{A, Route, Router, Routes};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::pages::banquets::BanquetsPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::rooms::RoomsPage;
use crate::state::ui::UiState;

/// SSR document shell rendered by the Axum integration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Cedar Court Hotel — rooms, dining, and banquet spaces in the old quarter."
                />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/cedarcourt.css" />
        <Title text="Cedar Court Hotel" />
        <Router>
            <Navbar />
            <main>
                <Routes fallback=NotFound>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("rooms") view=RoomsPage />
                    <Route path=StaticSegment("banquets") view=BanquetsPage />
                    <Route path=StaticSegment("contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"That page seems to have checked out."</p>
            <A href="/" attr:class="button button--primary">
                "Back to the lobby"
            </A>
        </section>
    }
}
