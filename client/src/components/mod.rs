//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they take signals and callbacks as props
//! and leave fetching and mutation to the page controllers in `pages`.

pub mod banner;
pub mod book_form;
pub mod confirm_delete;
pub mod form_parts;
pub mod loading_overlay;
pub mod modal;
pub mod name_form;
pub mod nav;
pub mod pagination;
pub mod search_select;
