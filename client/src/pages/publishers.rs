//! Publisher list page.

use leptos::prelude::*;

use catalog::Publisher;

use crate::pages::crud::{ListController, list_page, name_form};

#[component]
pub fn PublishersPage() -> impl IntoView {
    let ctrl = ListController::<Publisher>::new();
    let cells =
        |publisher: Publisher| view! { <td class="data-table__cell">{publisher.name}</td> }.into_any();
    list_page(ctrl, &["Name"], cells, name_form)
}
