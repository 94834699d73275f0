//! Single-field form used for genres and publishers.

use leptos::prelude::*;

use catalog::NameInput;

use crate::components::form_parts::{FormError, RequiredLabel, SubmitButton};

#[component]
pub fn NameForm(
    initial: Option<NameInput>,
    on_submit: Callback<NameInput>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
) -> impl IntoView {
    let id = initial.as_ref().and_then(|input| input.id);
    let name = RwSignal::new(initial.map(|input| input.name).unwrap_or_default());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(NameInput { id, name: name.get_untracked() });
    };

    view! {
        <form class="entity-form" on:submit=on_form_submit>
            <label class="entity-form__label">
                <RequiredLabel text="Name"/>
                <input
                    class="entity-form__input"
                    type="text"
                    required=true
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <FormError error=error/>
            <SubmitButton submitting=submitting/>
        </form>
    }
}
