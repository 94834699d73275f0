//! Option lists for the searchable single-select dropdowns.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use catalog::{Genre, Publisher};

/// One selectable entry: backend id plus display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

impl From<&Genre> for SelectOption {
    fn from(genre: &Genre) -> Self {
        Self { value: genre.id, label: genre.name.clone() }
    }
}

impl From<&Publisher> for SelectOption {
    fn from(publisher: &Publisher) -> Self {
        Self { value: publisher.id, label: publisher.name.clone() }
    }
}

/// Map fetched records to dropdown options, preserving backend order.
pub fn to_options<'a, T>(records: &'a [T]) -> Vec<SelectOption>
where
    &'a T: Into<SelectOption>,
{
    records.iter().map(Into::<SelectOption>::into).collect()
}

/// Options whose label contains `query`, ignoring case. Blank query keeps all.
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Option for `id`, if present. Id `0` means "none selected".
pub fn resolve_selected(options: &[SelectOption], id: i64) -> Option<SelectOption> {
    if id == 0 {
        return None;
    }
    options.iter().find(|option| option.value == id).cloned()
}
