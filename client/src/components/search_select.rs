//! Searchable single-select dropdown.
//!
//! Typing filters the option list case-insensitively; the current choice can
//! be cleared with the trailing button. Options are picked on `mousedown` so
//! the input's blur does not close the menu before the pick lands.

use leptos::prelude::*;

use crate::util::select::{SelectOption, filter_options};

#[component]
pub fn SearchSelect(
    id: &'static str,
    placeholder: &'static str,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    selected: RwSignal<Option<SelectOption>>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let open = RwSignal::new(false);

    let input_value = move || {
        if open.get() {
            query.get()
        } else {
            selected.with(|s| s.as_ref().map(|o| o.label.clone()).unwrap_or_default())
        }
    };

    let menu = move || {
        let current = selected.with(|s| s.as_ref().map(|o| o.value));
        let visible = options.with(|all| query.with(|q| filter_options(all, q)));
        if visible.is_empty() {
            return view! { <li class="search-select__empty">"No options"</li> }.into_any();
        }
        visible
            .into_iter()
            .map(|option| {
                let active = current == Some(option.value);
                let label = option.label.clone();
                view! {
                    <li
                        class="search-select__option"
                        class:search-select__option--selected=active
                        role="option"
                        on:mousedown=move |ev| {
                            ev.prevent_default();
                            selected.set(Some(option.clone()));
                            open.set(false);
                        }
                    >
                        {label}
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="search-select">
            <input
                id=id
                class="search-select__input"
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=input_value
                on:focus=move |_| {
                    query.set(String::new());
                    open.set(true);
                }
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    open.set(true);
                }
                on:blur=move |_| open.set(false)
            />
            <Show when=move || selected.with(Option::is_some)>
                <button
                    type="button"
                    class="search-select__clear"
                    aria-label="Clear selection"
                    on:click=move |_| selected.set(None)
                >
                    "✕"
                </button>
            </Show>
            <Show when=move || open.get()>
                <ul class="search-select__menu" role="listbox">{menu}</ul>
            </Show>
        </div>
    }
}
