//! Shared controller and layout for the three collection list pages.
//!
//! DESIGN
//! ======
//! Books, genres and publishers behave identically apart from their table
//! cells and form, so one generic [`ListController`] owns fetching, paging,
//! mutations and banners, and [`list_page`] renders the common chrome. The
//! page index lives in its own signal so the fetch effect only re-runs when
//! the user pages, never when the held list is patched.
//!
//! Mutations patch the held page in place; there is no refetch after a
//! create, update or delete.

use leptos::prelude::*;

use catalog::Resource;

use crate::components::banner::BannerStack;
use crate::components::confirm_delete::ConfirmDelete;
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::modal::Modal;
use crate::components::pagination::Pagination;
use crate::config::PAGE_SIZE;
use crate::state::banner::{BannerKind, Banners};
use crate::state::list::{FetchStatus, ListState, ModalState, next_page, prev_page, row_number};
use crate::state::messages;

#[cfg(feature = "hydrate")]
use crate::{net::api, state::banner::BANNER_TTL};

#[cfg(all(test, feature = "ssr"))]
#[path = "crud_test.rs"]
mod crud_test;

/// Reactive handles for one list page.
pub struct ListController<R: Resource> {
    pub state: RwSignal<ListState<R>>,
    pub page: RwSignal<u32>,
    pub modal: RwSignal<ModalState<R>>,
    pub banners: RwSignal<Banners>,
}

impl<R: Resource> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ListController<R> {}

impl<R: Resource> ListController<R> {
    /// Create the signals and start fetching page 0.
    pub fn new() -> Self {
        let ctrl = Self {
            state: RwSignal::new(ListState::default()),
            page: RwSignal::new(0),
            modal: RwSignal::new(ModalState::Closed),
            banners: RwSignal::new(Banners::default()),
        };
        Effect::new(move || {
            let page = ctrl.page.get();
            ctrl.load(page);
        });
        ctrl
    }

    fn load(self, page: u32) {
        self.state.update(|s| s.begin_fetch());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::fetch_page::<R>(catalog::PageRequest::new(page, PAGE_SIZE)).await;
            // A newer page was requested while this one was in flight.
            if !self.is_current(page) {
                return;
            }
            match result {
                Ok(fetched) => self.state.update(|s| s.apply_page(fetched)),
                Err(e) => {
                    log::warn!("{} page {page}: fetch failed: {e}", R::COLLECTION);
                    self.state.update(|s| s.fail_fetch(messages::fetch_failed(R::PLURAL)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = page;
    }

    /// Whether `page` is still the page the user is looking at.
    pub fn is_current(self, page: u32) -> bool {
        self.page.try_get_untracked() == Some(page)
    }

    pub fn next(self) {
        let total = self.state.with_untracked(|s| s.total_pages);
        if let Some(page) = next_page(self.page.get_untracked(), total) {
            self.page.set(page);
        }
    }

    pub fn prev(self) {
        if let Some(page) = prev_page(self.page.get_untracked()) {
            self.page.set(page);
        }
    }

    pub fn open_create(self) {
        self.state.update(|s| s.clear_form_error());
        self.modal.set(ModalState::Create);
    }

    pub fn open_edit(self, record: R) {
        self.state.update(|s| s.clear_form_error());
        self.modal.set(ModalState::Edit(record));
    }

    pub fn open_delete(self, id: i64) {
        self.modal.set(ModalState::ConfirmDelete(id));
    }

    pub fn close(self) {
        self.modal.set(ModalState::Closed);
    }

    /// Write shape of the record being edited, if the edit modal is open.
    pub fn editing_input(self) -> Option<R::Input> {
        self.modal.with_untracked(|modal| match modal {
            ModalState::Edit(record) => Some(record.to_input()),
            _ => None,
        })
    }

    /// Store a new record and append it to the held page.
    pub fn create(self, input: R::Input) {
        self.state.update(|s| s.begin_submit());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::store::<R>(&input).await {
                Ok(created) => self.on_created(created),
                Err(e) => {
                    log::warn!("{}: create failed: {e}", R::COLLECTION);
                    self.state.update(|s| s.fail_submit(messages::create_failed(R::LABEL)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = input;
    }

    /// Append a stored record. Closes the modal only if it is still the
    /// create form that submitted it.
    pub fn on_created(self, created: R) {
        self.state.update(|s| s.finish_create(created));
        self.close_if(ModalState::is_create);
        self.flash(BannerKind::Success, messages::created(R::LABEL));
    }

    /// Replace an updated record. Closes the modal only if it is still
    /// editing that record.
    pub fn on_updated(self, updated: R) {
        let id = updated.id();
        self.state.update(|s| s.finish_update(updated));
        self.close_if(|modal| matches!(modal, ModalState::Edit(record) if record.id() == id));
        self.flash(BannerKind::Success, messages::updated(R::LABEL));
    }

    fn close_if(self, still_open: impl FnOnce(&ModalState<R>) -> bool) {
        if self.modal.with_untracked(still_open) {
            self.close();
        }
    }

    /// Update the record open in the edit modal and replace it in place.
    pub fn update(self, input: R::Input) {
        let Some(id) = self.modal.with_untracked(|modal| match modal {
            ModalState::Edit(record) => Some(record.id()),
            _ => None,
        }) else {
            return;
        };
        self.state.update(|s| s.begin_submit());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update::<R>(id, &input).await {
                Ok(updated) => self.on_updated(updated),
                Err(e) => {
                    log::warn!("{} {id}: update failed: {e}", R::COLLECTION);
                    self.state.update(|s| s.fail_submit(messages::update_failed(R::LABEL)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, input);
    }

    /// Delete the record named by the confirm modal. The modal closes
    /// before the request goes out.
    pub fn confirm_delete(self) {
        let Some(id) = self.modal.with_untracked(|modal| match modal {
            ModalState::ConfirmDelete(id) => Some(*id),
            _ => None,
        }) else {
            return;
        };
        self.close();
        self.state.update(|s| s.begin_delete());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete::<R>(id).await {
                Ok(()) => {
                    self.state.update(|s| s.finish_delete(id));
                    self.flash(BannerKind::Success, messages::deleted(R::LABEL));
                }
                Err(e) => {
                    log::warn!("{} {id}: delete failed: {e}", R::COLLECTION);
                    self.state.update(|s| s.fail_delete());
                    self.flash(BannerKind::Warning, messages::delete_failed(R::LABEL));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }

    /// Show a banner and schedule its dismissal.
    fn flash(self, kind: BannerKind, message: String) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::banner::flash(
            self.banners,
            kind,
            message,
            gloo_timers::future::sleep(BANNER_TTL),
        ));
        #[cfg(not(feature = "hydrate"))]
        self.banners.update(|b| {
            b.show(kind, message);
        });
    }
}

impl<R: Resource> Default for ListController<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Props handed to a page's form renderer.
pub struct FormProps<I: Send + Sync + 'static> {
    pub initial: Option<I>,
    pub on_submit: Callback<I>,
    pub submitting: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Common list layout: banners, header with the add button, the table or its
/// loading/error placeholder, pagination and the three modals.
///
/// `columns` and `cells` describe the data columns between the row number and
/// the action column; `form` renders the create/edit form body.
pub fn list_page<R, Cells, Form>(
    ctrl: ListController<R>,
    columns: &'static [&'static str],
    cells: Cells,
    form: Form,
) -> impl IntoView
where
    R: Resource,
    Cells: Fn(R) -> AnyView + Copy + Send + Sync + 'static,
    Form: Fn(FormProps<R::Input>) -> AnyView + Copy + Send + Sync + 'static,
{
    let status = Memo::new(move |_| ctrl.state.with(|s| s.status.clone()));
    let submitting = Signal::derive(move || ctrl.state.with(|s| s.submitting));
    let form_error = Signal::derive(move || ctrl.state.with(|s| s.form_error.clone()));
    let deleting = Signal::derive(move || ctrl.state.with(|s| s.deleting));
    let total_pages = Signal::derive(move || ctrl.state.with(|s| s.total_pages));
    let close = Callback::new(move |()| ctrl.close());
    let on_create = Callback::new(move |input: R::Input| ctrl.create(input));
    let on_update = Callback::new(move |input: R::Input| ctrl.update(input));

    let rows = move || {
        let page = ctrl.page.get();
        ctrl.state
            .with(|s| s.items.clone())
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let id = record.id();
                let number = row_number(page, PAGE_SIZE, index);
                let target = record.clone();
                view! {
                    <tr class="data-table__row">
                        <td class="data-table__cell">{number}</td>
                        {cells(record)}
                        <td class="data-table__cell data-table__actions">
                            <button
                                type="button"
                                class="icon-btn icon-btn--edit"
                                title="Edit"
                                aria-label=format!("Edit {} {id}", R::LABEL)
                                on:click=move |_| ctrl.open_edit(target.clone())
                            >
                                "✎"
                            </button>
                            <span class="data-table__divider">"|"</span>
                            <button
                                type="button"
                                class="icon-btn icon-btn--delete"
                                title="Delete"
                                aria-label=format!("Delete {} {id}", R::LABEL)
                                disabled=move || deleting.get()
                                on:click=move |_| ctrl.open_delete(id)
                            >
                                "🗑"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    let body = move || match status.get() {
        FetchStatus::Loading => view! { <LoadingOverlay text=messages::fetching(R::PLURAL)/> }.into_any(),
        FetchStatus::Failed(message) => {
            view! { <div class="list-page__error" role="alert">{format!("Error: {message}")}</div> }
                .into_any()
        }
        FetchStatus::Ready => view! {
            <div class="data-table__wrap">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            {columns.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
                <Pagination
                    page=ctrl.page
                    total_pages=total_pages
                    on_prev=Callback::new(move |()| ctrl.prev())
                    on_next=Callback::new(move |()| ctrl.next())
                />
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="list-page">
            <BannerStack banners=ctrl.banners/>
            <header class="list-page__header">
                <h1 class="list-page__title">{format!("{} List", R::LABEL)}</h1>
                <button
                    type="button"
                    class="btn btn--add"
                    aria-label=format!("Add {}", R::LABEL)
                    on:click=move |_| ctrl.open_create()
                >
                    "+"
                </button>
            </header>
            {body}
            <Modal
                open=Signal::derive(move || ctrl.modal.with(ModalState::is_create))
                title=format!("Add New {}", R::LABEL)
                on_close=close
            >
                {form(FormProps { initial: None, on_submit: on_create, submitting, error: form_error })}
            </Modal>
            <Modal
                open=Signal::derive(move || ctrl.modal.with(ModalState::is_edit))
                title=format!("Edit {}", R::LABEL)
                on_close=close
            >
                {form(FormProps {
                    initial: ctrl.editing_input(),
                    on_submit: on_update,
                    submitting,
                    error: form_error,
                })}
            </Modal>
            <Modal
                open=Signal::derive(move || ctrl.modal.with(ModalState::is_confirm_delete))
                title=format!("Delete {}", R::LABEL)
                on_close=close
            >
                <ConfirmDelete
                    prompt=messages::confirm_delete(R::LABEL)
                    busy=deleting
                    on_cancel=close
                    on_confirm=Callback::new(move |()| ctrl.confirm_delete())
                />
            </Modal>
        </div>
    }
}

/// Form renderer for the single-field collections.
pub fn name_form(props: FormProps<catalog::NameInput>) -> AnyView {
    use crate::components::name_form::NameForm;

    view! {
        <NameForm
            initial=props.initial
            on_submit=props.on_submit
            submitting=props.submitting
            error=props.error
        />
    }
    .into_any()
}
