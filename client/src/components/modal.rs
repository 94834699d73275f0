//! Generic modal shell.
//!
//! Carries no state: the caller owns `open` and decides what closing means.

use leptos::prelude::*;

/// Overlay with a title bar and a close control.
///
/// Renders nothing while `open` is false. Clicking the backdrop or the close
/// button runs `on_close`; clicks inside the panel do not reach the backdrop.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal__header">
                        <h2 class="modal__title">{title.clone()}</h2>
                        <button
                            type="button"
                            class="modal__close"
                            aria-label="Close modal"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="modal__body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
