//! Pieces shared by the entity forms.

use leptos::prelude::*;

/// Inline submission error under a form.
#[component]
pub fn FormError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="entity-form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Submit button that locks while a request is in flight.
#[component]
pub fn SubmitButton(#[prop(into)] submitting: Signal<bool>) -> impl IntoView {
    view! {
        <div class="entity-form__actions">
            <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Saving..." } else { "Save" }}
            </button>
        </div>
    }
}

/// Label text with the red required marker.
#[component]
pub fn RequiredLabel(text: &'static str) -> impl IntoView {
    view! {
        <span class="entity-form__label-text">
            {text}
            " "
            <span class="entity-form__required">"*"</span>
        </span>
    }
}
