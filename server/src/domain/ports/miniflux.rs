//! Miniflux client port trait
//!
//! Defines the interface for reading entries from a Miniflux instance.

use async_trait::async_trait;

use crate::domain::entities::{Entry, EntryFilter};
use crate::error::MinifluxError;

/// Miniflux API client trait
///
/// Implementations must be shareable across concurrent requests; they are
/// built once at startup and only read afterwards.
#[async_trait]
pub trait MinifluxClient: Send + Sync {
    /// List entries matching the filter, in the order the server returns them
    async fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, MinifluxError>;
}
