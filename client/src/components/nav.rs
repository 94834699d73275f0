//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::{NAV_LINKS, is_active};

/// Brand link plus one link per collection; the link for the current path is highlighted.
#[component]
pub fn Nav() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <a href="/" class="nav__brand">"Book Management System"</a>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        let href = link.href;
                        view! {
                            <a
                                href=href
                                class="nav__link"
                                class:nav__link--active=move || pathname.with(|path| is_active(path, href))
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
