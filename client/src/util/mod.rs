//! Pure helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Kept free of Leptos and browser types so they can be tested natively.

pub mod nav;
pub mod select;
