//! Navigation link matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A top-level route shown in the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/books", label: "Books" },
    NavLink { href: "/genres", label: "Genres" },
    NavLink { href: "/publishers", label: "Publishers" },
];

/// Exact match, or prefix match for any link other than the root.
pub fn is_active(path: &str, href: &str) -> bool {
    path == href || (href != "/" && path.starts_with(href))
}
