//! Entry domain entity
//!
//! A starred article as returned by the Miniflux API.

use chrono::{DateTime, Utc};

/// Unique identifier for an entry on the Miniflux instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub i64);

/// A starred article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub url: String,
    /// HTML body of the article
    pub content: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
}

/// Filter for listing entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFilter {
    pub limit: usize,
    /// Field to sort by, e.g. `published_at`
    pub order: &'static str,
    /// `asc` or `desc`
    pub direction: &'static str,
    pub starred: bool,
}

impl EntryFilter {
    /// Most recently published starred entries first
    pub fn starred(limit: usize) -> Self {
        Self {
            limit,
            order: "published_at",
            direction: "desc",
            starred: true,
        }
    }
}
