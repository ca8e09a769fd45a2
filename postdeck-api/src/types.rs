//! Remote record types, shaped by what the API actually serves.

use serde::Deserialize;

/// A blog post. Immutable once received; lives for the view session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A comment attached to exactly one post via `post_id`.
///
/// `name` is the author's display name, not a title — the API's field
/// naming, kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}
