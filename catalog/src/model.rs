//! Catalog entities and their write shapes.
//!
//! Field names follow the backend's camelCase JSON. The backend may send
//! `null` for an absent publisher; those deserialize as `0` / `""` so a book
//! without a publisher looks the same whether it was read or just created.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::resource::Resource;

/// A book as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub title: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub author: String,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub genre_id: i64,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub genre_name: String,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub publisher_id: i64,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub publisher_name: String,
}

impl Book {
    /// Whether the book references a publisher (`publisherId == 0` means none).
    #[must_use]
    pub fn has_publisher(&self) -> bool {
        self.publisher_id != 0
    }
}

/// Body of `POST /api/books/store` and `PUT /api/books/update/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub genre_id: i64,
    pub genre_name: String,
    pub publisher_id: i64,
    pub publisher_name: String,
}

/// A genre as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub name: String,
}

/// A publisher as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    pub id: i64,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub name: String,
}

/// Write shape shared by genres and publishers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}

impl Resource for Book {
    type Input = BookInput;
    const COLLECTION: &'static str = "books";
    const LABEL: &'static str = "Book";
    const PLURAL: &'static str = "Books";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_input(&self) -> BookInput {
        BookInput {
            id: Some(self.id),
            title: self.title.clone(),
            author: self.author.clone(),
            genre_id: self.genre_id,
            genre_name: self.genre_name.clone(),
            publisher_id: self.publisher_id,
            publisher_name: self.publisher_name.clone(),
        }
    }
}

impl Resource for Genre {
    type Input = NameInput;
    const COLLECTION: &'static str = "genres";
    const LABEL: &'static str = "Genre";
    const PLURAL: &'static str = "Genres";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_input(&self) -> NameInput {
        NameInput { id: Some(self.id), name: self.name.clone() }
    }
}

impl Resource for Publisher {
    type Input = NameInput;
    const COLLECTION: &'static str = "publishers";
    const LABEL: &'static str = "Publisher";
    const PLURAL: &'static str = "Publishers";

    fn id(&self) -> i64 {
        self.id
    }

    fn to_input(&self) -> NameInput {
        NameInput { id: Some(self.id), name: self.name.clone() }
    }
}

/// Look up the display name for `id` in a list of named records.
///
/// Returns an empty string for a dangling reference so the cell renders blank.
#[must_use]
pub fn name_for<'a, I>(records: I, id: i64) -> String
where
    I: IntoIterator<Item = (i64, &'a str)>,
{
    records
        .into_iter()
        .find(|(record_id, _)| *record_id == id)
        .map(|(_, name)| name.to_owned())
        .unwrap_or_default()
}

fn zero_if_null<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
