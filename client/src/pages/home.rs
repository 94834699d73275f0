//! Landing page.

use leptos::prelude::*;

use crate::util::nav::NAV_LINKS;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <h1 class="home__title">"Book Management System"</h1>
            <p class="home__lead">"Manage the catalog's books, genres and publishers."</p>
            <ul class="home__links">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href class="home__link">{link.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
