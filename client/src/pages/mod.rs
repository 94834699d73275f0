//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The three collection pages are thin wrappers over `crud`, which owns the
//! shared list controller and layout. Rendering details live in `components`.

pub mod book_detail;
pub mod books;
pub mod crud;
pub mod genres;
pub mod home;
pub mod publishers;
