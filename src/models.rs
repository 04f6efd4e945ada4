//! Frontend Models
//!
//! Data structures for the user list.

use serde::{Deserialize, Serialize};

/// A user record. Identity is the `id` field, which is unique and stable
/// for the lifetime of the collection; `name` and `place` never change
/// after creation. Collection membership is always decided by id, never
/// by comparing whole records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub place: String,
}
