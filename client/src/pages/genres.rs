//! Genre list page.

use leptos::prelude::*;

use catalog::Genre;

use crate::pages::crud::{ListController, list_page, name_form};

#[component]
pub fn GenresPage() -> impl IntoView {
    let ctrl = ListController::<Genre>::new();
    let cells = |genre: Genre| view! { <td class="data-table__cell">{genre.name}</td> }.into_any();
    list_page(ctrl, &["Name"], cells, name_form)
}
