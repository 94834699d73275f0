//! Spinner and the loading placeholder that replaces a table while it fetches.

use leptos::prelude::*;

const DEFAULT_LOADING_TEXT: &str = "Loading books...";

/// Indeterminate spinner.
#[component]
pub fn Spinner(#[prop(optional)] large: bool) -> impl IntoView {
    view! {
        <div class="spinner" class:spinner--large=large role="status" aria-label="Loading">
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Centered spinner with a caption.
#[component]
pub fn LoadingOverlay(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    let text = text.unwrap_or_else(|| DEFAULT_LOADING_TEXT.to_owned());
    view! {
        <div class="loading-overlay">
            <Spinner large=true/>
            <p class="loading-overlay__text">{text}</p>
        </div>
    }
}
