//! Book detail page at `/books/{id}`.
//!
//! The backend has no single-record route, so the book is located in the
//! unpaginated collection.

#[cfg(test)]
#[path = "book_detail_test.rs"]
mod book_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use catalog::Book;

use crate::components::loading_overlay::LoadingOverlay;

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    Found(Book),
    NotFound,
    Failed(String),
}

/// Parse the route segment; anything but an integer is treated as missing.
pub fn parse_book_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Outcome of searching `books` for `id`.
pub fn lookup(books: Vec<Book>, id: i64) -> DetailState {
    books
        .into_iter()
        .find(|book| book.id == id)
        .map_or(DetailState::NotFound, DetailState::Found)
}

#[component]
pub fn BookDetailPage() -> impl IntoView {
    let params = use_params_map();
    let raw_id = move || params.read().get("id").unwrap_or_default();
    let detail = RwSignal::new(DetailState::Loading);

    Effect::new(move || {
        let Some(id) = parse_book_id(&raw_id()) else {
            detail.set(DetailState::NotFound);
            return;
        };
        detail.set(DetailState::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_all::<Book>().await {
                Ok(books) => detail.set(lookup(books, id)),
                Err(e) => {
                    log::warn!("book {id}: lookup failed: {e}");
                    detail.set(DetailState::Failed(crate::state::messages::fetch_failed("Books")));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        <div class="detail-page">
            <h1 class="detail-page__title">{move || format!("Book {} Details", raw_id())}</h1>
            {move || match detail.get() {
                DetailState::Loading => view! { <LoadingOverlay/> }.into_any(),
                DetailState::NotFound => {
                    view! { <p class="detail-page__missing">"Book not found."</p> }.into_any()
                }
                DetailState::Failed(message) => {
                    view! { <p class="detail-page__error" role="alert">{format!("Error: {message}")}</p> }
                        .into_any()
                }
                DetailState::Found(book) => view! {
                    <dl class="detail-page__fields">
                        <dt>"Title"</dt>
                        <dd>{book.title}</dd>
                        <dt>"Author"</dt>
                        <dd>{book.author}</dd>
                        <dt>"Genre"</dt>
                        <dd>{book.genre_name}</dd>
                        <dt>"Publisher"</dt>
                        <dd>{book.publisher_name}</dd>
                    </dl>
                }
                .into_any(),
            }}
            <a href="/books" class="detail-page__back">"Back to books"</a>
        </div>
    }
}
