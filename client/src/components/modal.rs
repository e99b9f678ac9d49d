//! Generic modal dialog driven by an open/close signal.

use leptos::prelude::*;

#[component]
pub fn Modal(
    title: &'static str,
    open: Signal<bool>,
    /// Called when the backdrop or close button is clicked.
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <div class="modal__header">
                        <h2 class="modal__title">{title}</h2>
                        <button class="modal__close" aria-label="Close" on:click=move |_| on_close.run(())>
                            "\u{00d7}"
                        </button>
                    </div>
                    <div class="modal__body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
