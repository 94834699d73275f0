//! Per-page list state shared by the Books, Genres and Publishers views.
//!
//! DESIGN
//! ======
//! The list holds exactly one backend page. Mutations patch that page in
//! place instead of re-fetching: create appends, update replaces by id,
//! delete filters by id. Paging math lives here so the views only render.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use catalog::{Page, Resource};

/// Status of the most recent page fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Which modal, if any, the list view is showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState<R> {
    #[default]
    Closed,
    Create,
    Edit(R),
    ConfirmDelete(i64),
}

impl<R> ModalState<R> {
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    pub fn is_confirm_delete(&self) -> bool {
        matches!(self, Self::ConfirmDelete(_))
    }
}

/// One page of records plus the flags the view needs around it.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<R> {
    pub items: Vec<R>,
    pub total_pages: u32,
    pub status: FetchStatus,
    pub submitting: bool,
    pub deleting: bool,
    pub form_error: Option<String>,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            status: FetchStatus::Loading,
            submitting: false,
            deleting: false,
            form_error: None,
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// Replace the held page; earlier pages are discarded.
    pub fn apply_page(&mut self, page: Page<R>) {
        self.items = page.content;
        self.total_pages = page.total_pages;
        self.status = FetchStatus::Ready;
    }

    pub fn fail_fetch(&mut self, message: String) {
        self.status = FetchStatus::Failed(message);
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.form_error = None;
    }

    pub fn finish_create(&mut self, created: R) {
        self.items.push(created);
        self.submitting = false;
    }

    /// Replace the record whose id matches `updated`; other rows are untouched.
    pub fn finish_update(&mut self, updated: R) {
        let id = updated.id();
        if let Some(slot) = self.items.iter_mut().find(|item| item.id() == id) {
            *slot = updated;
        }
        self.submitting = false;
    }

    pub fn fail_submit(&mut self, message: String) {
        self.submitting = false;
        self.form_error = Some(message);
    }

    pub fn begin_delete(&mut self) {
        self.deleting = true;
    }

    /// Drop the record with `id` after a successful delete.
    pub fn finish_delete(&mut self, id: i64) {
        self.items.retain(|item| item.id() != id);
        self.deleting = false;
    }

    pub fn fail_delete(&mut self) {
        self.deleting = false;
    }

    pub fn clear_form_error(&mut self) {
        self.form_error = None;
    }
}

/// 1-based row number across pages.
pub fn row_number(page: u32, page_size: u32, local_index: usize) -> u64 {
    u64::from(page) * u64::from(page_size) + local_index as u64 + 1
}

/// "Previous" is disabled on the first page.
pub fn prev_disabled(page: u32) -> bool {
    page == 0
}

/// "Next" is disabled on the last page (`page == total_pages - 1`).
pub fn next_disabled(page: u32, total_pages: u32) -> bool {
    total_pages.checked_sub(1) == Some(page)
}

/// Pagination controls only render when there is more than one page.
pub fn shows_pager(total_pages: u32) -> bool {
    total_pages > 1
}

/// Index of the next page, or `None` when already on the last one.
pub fn next_page(page: u32, total_pages: u32) -> Option<u32> {
    (page.saturating_add(1) < total_pages).then(|| page + 1)
}

/// Index of the previous page, or `None` on the first one.
pub fn prev_page(page: u32) -> Option<u32> {
    page.checked_sub(1)
}

/// `Page {n} of {total}` label under the table.
pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {} of {total_pages}", page.saturating_add(1))
}
