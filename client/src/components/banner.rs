//! Floating success/warning banners for a list view.

use leptos::prelude::*;

use crate::state::banner::{BannerKind, Banners};

#[component]
pub fn BannerStack(banners: RwSignal<Banners>) -> impl IntoView {
    let message = move |kind| banners.with(|b| b.message(kind).map(str::to_owned));

    view! {
        <Show when=move || message(BannerKind::Success).is_some()>
            <div class="banner banner--success" role="status">
                {move || message(BannerKind::Success).unwrap_or_default()}
            </div>
        </Show>
        <Show when=move || message(BannerKind::Warning).is_some()>
            <div class="banner banner--warning" role="alert">
                {move || message(BannerKind::Warning).unwrap_or_default()}
            </div>
        </Show>
    }
}
