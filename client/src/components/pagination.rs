//! Previous/Next controls under a paged table.

use leptos::prelude::*;

use crate::state::list::{next_disabled, page_label, prev_disabled, shows_pager};

/// Hidden unless there is more than one page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || shows_pager(total_pages.get())>
            <div class="pagination">
                <button
                    type="button"
                    class="pagination__btn"
                    disabled=move || prev_disabled(page.get())
                    on:click=move |_| on_prev.run(())
                >
                    "Previous"
                </button>
                <span class="pagination__label">{move || page_label(page.get(), total_pages.get())}</span>
                <button
                    type="button"
                    class="pagination__btn"
                    disabled=move || next_disabled(page.get(), total_pages.get())
                    on:click=move |_| on_next.run(())
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
