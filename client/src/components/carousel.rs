//! Photo carousel with manual controls and optional auto-advance.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use leptos::prelude::*;

/// One carousel photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub(crate) fn next_index(current: usize, count: usize) -> usize {
    if count == 0 { 0 } else { (current + 1) % count }
}

pub(crate) fn prev_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else if current == 0 {
        count - 1
    } else {
        current - 1
    }
}

#[component]
pub fn Carousel(
    slides: Vec<Slide>,
    /// Auto-advance interval in milliseconds; `None` disables it.
    #[prop(optional)]
    auto_advance_ms: Option<u32>,
) -> impl IntoView {
    let index = RwSignal::new(0usize);
    let count = slides.len();

    let on_prev = move |_| index.update(|i| *i = prev_index(*i, count));
    let on_next = move |_| index.update(|i| *i = next_index(*i, count));

    // Auto-advance until the carousel unmounts; the failed write after
    // disposal ends the loop.
    #[cfg(feature = "hydrate")]
    if let Some(ms) = auto_advance_ms {
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(ms).await;
                if index.try_update(|i| *i = next_index(*i, count)).is_none() {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = auto_advance_ms;

    view! {
        <div class="carousel">
            <button class="carousel__control carousel__control--prev" aria-label="Previous photo" on:click=on_prev>
                "\u{2039}"
            </button>
            <div class="carousel__frame">
                {slides
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(i, slide)| {
                        view! {
                            <figure class="carousel__slide" class:carousel__slide--active=move || index.get() == i>
                                <img src=slide.src alt=slide.alt loading="lazy" />
                                <figcaption>{slide.caption}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="carousel__control carousel__control--next" aria-label="Next photo" on:click=on_next>
                "\u{203a}"
            </button>
            <div class="carousel__dots">
                {(0..count)
                    .map(|i| {
                        view! {
                            <button
                                class="carousel__dot"
                                class:carousel__dot--active=move || index.get() == i
                                aria-label=format!("Go to photo {}", i + 1)
                                on:click=move |_| index.set(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
