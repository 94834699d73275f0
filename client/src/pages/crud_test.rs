use super::*;
use catalog::{Genre, NameInput, Page};
use leptos::reactive::owner::Owner;

use crate::state::banner::BannerKind;

fn genre(id: i64, name: &str) -> Genre {
    Genre { id, name: name.to_owned() }
}

fn controller() -> (Owner, ListController<Genre>) {
    let owner = Owner::new();
    owner.set();
    (owner, ListController::<Genre>::new())
}

fn render(ctrl: ListController<Genre>) -> String {
    let cells = |g: Genre| view! { <td class="data-table__cell">{g.name}</td> }.into_any();
    list_page(ctrl, &["Name"], cells, name_form).to_html()
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn renders_one_row_per_record_with_global_numbers() {
    let (_owner, ctrl) = controller();
    ctrl.page.set(1);
    ctrl.state.update(|s| {
        s.apply_page(Page {
            content: vec![genre(6, "Drama"), genre(7, "Poetry"), genre(8, "Satire")],
            total_pages: 2,
        });
    });

    let html = render(ctrl);
    assert_eq!(html.matches("data-table__row").count(), 3);
    for number in [6, 7, 8] {
        assert!(html.contains(&format!(">{number}</td>")), "missing row number {number}");
    }
    assert!(html.contains("Page 2 of 2"));
}

#[test]
fn loading_state_renders_placeholder_instead_of_table() {
    let (_owner, ctrl) = controller();
    let html = render(ctrl);
    assert!(html.contains("Fetching Genres..."));
    assert_eq!(html.matches("data-table__row").count(), 0);
}

#[test]
fn failed_fetch_renders_blocking_error() {
    let (_owner, ctrl) = controller();
    ctrl.state.update(|s| s.fail_fetch("Failed to fetch genres".to_owned()));
    let html = render(ctrl);
    assert!(html.contains("Error: Failed to fetch genres"));
    assert!(!html.contains("<table"));
}

// =============================================================
// Paging
// =============================================================

#[test]
fn is_current_tracks_page_signal() {
    let (_owner, ctrl) = controller();
    assert!(ctrl.is_current(0));
    ctrl.state.update(|s| s.apply_page(Page { content: vec![genre(1, "Drama")], total_pages: 3 }));
    ctrl.next();
    assert!(!ctrl.is_current(0));
    assert!(ctrl.is_current(1));
}

#[test]
fn next_and_prev_stop_at_bounds() {
    let (_owner, ctrl) = controller();
    ctrl.state.update(|s| s.apply_page(Page { content: Vec::new(), total_pages: 2 }));
    ctrl.prev();
    assert_eq!(ctrl.page.get_untracked(), 0);
    ctrl.next();
    ctrl.next();
    assert_eq!(ctrl.page.get_untracked(), 1);
}

// =============================================================
// Modal-driven mutations
// =============================================================

#[test]
fn editing_input_carries_record_id() {
    let (_owner, ctrl) = controller();
    assert_eq!(ctrl.editing_input(), None);
    ctrl.open_edit(genre(4, "Drama"));
    assert_eq!(ctrl.editing_input(), Some(NameInput { id: Some(4), name: "Drama".to_owned() }));
}

#[test]
fn update_ignored_unless_edit_modal_open() {
    let (_owner, ctrl) = controller();
    ctrl.open_create();
    ctrl.update(NameInput { id: Some(4), name: "Drama".to_owned() });
    assert!(!ctrl.state.with_untracked(|s| s.submitting));

    ctrl.open_edit(genre(4, "Drama"));
    ctrl.update(NameInput { id: Some(4), name: "Tragedy".to_owned() });
    assert!(ctrl.state.with_untracked(|s| s.submitting));
}

#[test]
fn confirm_delete_ignored_unless_confirm_modal_open() {
    let (_owner, ctrl) = controller();
    ctrl.open_edit(genre(4, "Drama"));
    ctrl.confirm_delete();
    assert!(!ctrl.state.with_untracked(|s| s.deleting));
    assert!(ctrl.modal.with_untracked(ModalState::is_edit));

    ctrl.open_delete(4);
    ctrl.confirm_delete();
    assert!(ctrl.state.with_untracked(|s| s.deleting));
    assert_eq!(ctrl.modal.get_untracked(), ModalState::Closed);
}

#[test]
fn created_record_closes_create_modal_and_flashes() {
    let (_owner, ctrl) = controller();
    ctrl.state.update(|s| s.apply_page(Page { content: vec![genre(1, "Drama")], total_pages: 1 }));
    ctrl.open_create();

    ctrl.on_created(genre(2, "Poetry"));
    assert_eq!(ctrl.state.with_untracked(|s| s.items.len()), 2);
    assert_eq!(ctrl.modal.get_untracked(), ModalState::Closed);
    assert_eq!(
        ctrl.banners.with_untracked(|b| b.message(BannerKind::Success).map(str::to_owned)),
        Some("Genre created successfully!".to_owned())
    );
}

#[test]
fn late_create_leaves_newer_edit_modal_open() {
    let (_owner, ctrl) = controller();
    ctrl.open_create();
    ctrl.close();
    ctrl.open_edit(genre(1, "Drama"));

    ctrl.on_created(genre(2, "Poetry"));
    assert_eq!(ctrl.modal.get_untracked(), ModalState::Edit(genre(1, "Drama")));
}

#[test]
fn update_closes_only_matching_edit_modal() {
    let (_owner, ctrl) = controller();
    ctrl.state.update(|s| {
        s.apply_page(Page { content: vec![genre(1, "Drama"), genre(2, "Poetry")], total_pages: 1 });
    });

    ctrl.open_edit(genre(2, "Poetry"));
    ctrl.on_updated(genre(1, "Tragedy"));
    assert!(ctrl.modal.with_untracked(ModalState::is_edit));
    assert_eq!(ctrl.state.with_untracked(|s| s.items[0].name.clone()), "Tragedy");

    ctrl.on_updated(genre(2, "Verse"));
    assert_eq!(ctrl.modal.get_untracked(), ModalState::Closed);
}
