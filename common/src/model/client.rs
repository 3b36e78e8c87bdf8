use serde::{Deserialize, Serialize};

/// A registered client.
///
/// The business identity of a client is its `document` number. The `id` is the
/// surrogate key assigned by the store on insertion and carries no meaning
/// outside of it; a client that has not been stored yet has `id == 0`.
///
/// Nothing prevents two stored rows from sharing the same `document`. Lookups
/// by document return the first row the store finds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Surrogate row id, `0` until the client is persisted.
    pub id: i64,
    /// Document number (national id, tax id...). Immutable once created.
    pub document: i32,
    /// Display name.
    pub name: String,
    /// Ordered list of phone numbers. Kept as a list everywhere except in the
    /// `phones` column, see [`crate::phones`].
    pub phones: Vec<String>,
}

impl Client {
    /// Builds a client that has not been persisted yet.
    pub fn new(document: i32, name: impl Into<String>, phones: Vec<String>) -> Self {
        Self {
            id: 0,
            document,
            name: name.into(),
            phones,
        }
    }

    /// Returns a copy with `name` and `phones` replaced, keeping `id` and `document`.
    pub fn with_details(&self, name: impl Into<String>, phones: Vec<String>) -> Self {
        Self {
            name: name.into(),
            phones,
            ..self.clone()
        }
    }
}
