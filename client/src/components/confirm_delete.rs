//! Body of the delete-confirmation modal.

use leptos::prelude::*;

#[component]
pub fn ConfirmDelete(
    #[prop(into)] prompt: String,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <p class="confirm-delete__prompt">{prompt}</p>
        <div class="confirm-delete__actions">
            <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
            <button
                type="button"
                class="btn btn--danger"
                disabled=move || busy.get()
                on:click=move |_| on_confirm.run(())
            >
                "Delete"
            </button>
        </div>
    }
}
