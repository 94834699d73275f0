//! Book list page.
//!
//! Genre and publisher columns are display names looked up from the full
//! genre/publisher collections, fetched once when the page mounts. A book
//! whose genre no longer exists shows an empty cell.

use leptos::prelude::*;

use catalog::{Book, Genre, Publisher, name_for};

use crate::components::book_form::BookForm;
use crate::pages::crud::{FormProps, ListController, list_page};

#[component]
pub fn BooksPage() -> impl IntoView {
    let ctrl = ListController::<Book>::new();
    let genres = RwSignal::new(Vec::<Genre>::new());
    let publishers = RwSignal::new(Vec::<Publisher>::new());

    #[cfg(feature = "hydrate")]
    load_lookups(genres, publishers);

    let cells = move |book: Book| {
        let href = format!("/books/{}", book.id);
        let genre_id = book.genre_id;
        let publisher_id = book.publisher_id;
        view! {
            <td class="data-table__cell">
                <a href=href class="data-table__link">{book.title}</a>
            </td>
            <td class="data-table__cell">{book.author}</td>
            <td class="data-table__cell">
                {move || genres.with(|all| name_for(all.iter().map(|g| (g.id, g.name.as_str())), genre_id))}
            </td>
            <td class="data-table__cell">
                {move || {
                    publishers.with(|all| name_for(all.iter().map(|p| (p.id, p.name.as_str())), publisher_id))
                }}
            </td>
        }
        .into_any()
    };

    list_page(ctrl, &["Title", "Author", "Genre", "Publisher"], cells, book_form)
}

fn book_form(props: FormProps<catalog::BookInput>) -> AnyView {
    view! {
        <BookForm
            initial=props.initial
            on_submit=props.on_submit
            submitting=props.submitting
            error=props.error
        />
    }
    .into_any()
}

#[cfg(feature = "hydrate")]
fn load_lookups(genres: RwSignal<Vec<Genre>>, publishers: RwSignal<Vec<Publisher>>) {
    use crate::net::api;

    leptos::task::spawn_local(async move {
        match api::fetch_all::<Genre>().await {
            Ok(all) => genres.set(all),
            Err(e) => log::warn!("books: genre lookup failed: {e}"),
        }
    });
    leptos::task::spawn_local(async move {
        match api::fetch_all::<Publisher>().await {
            Ok(all) => publishers.set(all),
            Err(e) => log::warn!("books: publisher lookup failed: {e}"),
        }
    });
}
