//! Full-width hero banner used at the top of each page.

use leptos::prelude::*;

#[component]
pub fn Hero(
    /// Headline text.
    title: &'static str,
    /// Supporting line under the headline.
    subtitle: &'static str,
    /// Background image URL.
    image: &'static str,
    /// Optional call-to-action area rendered under the subtitle.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="hero" style=format!("background-image: url('{image}')")>
            <div class="hero__scrim">
                <h1 class="hero__title">{title}</h1>
                <p class="hero__subtitle">{subtitle}</p>
                {children.map(|children| view! { <div class="hero__actions">{children()}</div> })}
            </div>
        </section>
    }
}
