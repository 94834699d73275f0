//! Book create/edit form.
//!
//! Genre and publisher lists are fetched once when the form mounts. When
//! editing, the initial genre/publisher ids are re-resolved against those
//! lists as they arrive, so the dropdowns show the stored choice.

#[cfg(test)]
#[path = "book_form_test.rs"]
mod book_form_test;

use leptos::prelude::*;

use catalog::BookInput;

use crate::components::form_parts::{FormError, RequiredLabel, SubmitButton};
use crate::components::search_select::SearchSelect;
use crate::util::select::{SelectOption, resolve_selected};

/// Assemble the outgoing payload from the form fields.
///
/// Returns `None` when no genre is chosen; the form refuses to submit then.
/// A missing publisher is sent as id `0` with an empty name.
pub fn build_book_input(
    id: Option<i64>,
    title: String,
    author: String,
    genre: Option<&SelectOption>,
    publisher: Option<&SelectOption>,
) -> Option<BookInput> {
    let genre = genre?;
    let (publisher_id, publisher_name) =
        publisher.map_or((0, String::new()), |p| (p.value, p.label.clone()));
    Some(BookInput {
        id,
        title,
        author,
        genre_id: genre.value,
        genre_name: genre.label.clone(),
        publisher_id,
        publisher_name,
    })
}

#[component]
pub fn BookForm(
    initial: Option<BookInput>,
    on_submit: Callback<BookInput>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let id = initial.as_ref().and_then(|book| book.id);
    let selected_ids = initial.as_ref().map(|book| (book.genre_id, book.publisher_id));
    let title = RwSignal::new(initial.as_ref().map(|b| b.title.clone()).unwrap_or_default());
    let author = RwSignal::new(initial.as_ref().map(|b| b.author.clone()).unwrap_or_default());

    let genre_options = RwSignal::new(Vec::<SelectOption>::new());
    let publisher_options = RwSignal::new(Vec::<SelectOption>::new());
    let genre = RwSignal::new(None::<SelectOption>);
    let publisher = RwSignal::new(None::<SelectOption>);
    let missing_genre = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    load_options(genre_options, publisher_options);

    Effect::new(move || {
        let Some((genre_id, publisher_id)) = selected_ids else {
            return;
        };
        if let Some(option) = genre_options.with(|options| resolve_selected(options, genre_id)) {
            genre.set(Some(option));
        }
        if let Some(option) = publisher_options.with(|options| resolve_selected(options, publisher_id)) {
            publisher.set(Some(option));
        }
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = build_book_input(
            id,
            title.get_untracked(),
            author.get_untracked(),
            genre.get_untracked().as_ref(),
            publisher.get_untracked().as_ref(),
        );
        match input {
            Some(input) => {
                missing_genre.set(false);
                on_submit.run(input);
            }
            None => missing_genre.set(true),
        }
    };

    view! {
        <form class="entity-form" on:submit=on_form_submit>
            <label class="entity-form__label">
                <RequiredLabel text="Title"/>
                <input
                    class="entity-form__input"
                    type="text"
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="entity-form__label">
                <RequiredLabel text="Author"/>
                <input
                    class="entity-form__input"
                    type="text"
                    required=true
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
            </label>
            <div class="entity-form__label">
                <label for="genre">
                    <RequiredLabel text="Genre"/>
                </label>
                <SearchSelect id="genre" placeholder="Select a genre" options=genre_options selected=genre/>
                <Show when=move || missing_genre.get()>
                    <p class="entity-form__error">"Please select a genre."</p>
                </Show>
            </div>
            <div class="entity-form__label">
                <label class="entity-form__label-text" for="publisher">"Publisher"</label>
                <SearchSelect
                    id="publisher"
                    placeholder="Select a publisher"
                    options=publisher_options
                    selected=publisher
                />
            </div>
            <FormError error=error/>
            <SubmitButton submitting=submitting/>
        </form>
    }
}

#[cfg(feature = "hydrate")]
fn load_options(genres: RwSignal<Vec<SelectOption>>, publishers: RwSignal<Vec<SelectOption>>) {
    use catalog::{Genre, Publisher};

    use crate::net::api;
    use crate::util::select::to_options;

    leptos::task::spawn_local(async move {
        match api::fetch_all::<Genre>().await {
            Ok(records) => genres.set(to_options(&records)),
            Err(e) => log::warn!("book form: genre options unavailable: {e}"),
        }
    });
    leptos::task::spawn_local(async move {
        match api::fetch_all::<Publisher>().await {
            Ok(records) => publishers.set(to_options(&records)),
            Err(e) => log::warn!("book form: publisher options unavailable: {e}"),
        }
    });
}
