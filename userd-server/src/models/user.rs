//! User entity

use serde::{Deserialize, Deserializer, Serialize};

/// User record exchanged between the HTTP layer and storage.
///
/// `id` is assigned by the database on insert; a value sent by the client
/// is ignored on create and overwritten by the path id on update/delete.
/// Decoding is lenient: missing fields and explicit `null` fall back to the
/// zero value, unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Nullable in storage, normalized to 0
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i64,
}

impl User {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            age,
        }
    }

    /// Same record carrying the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
