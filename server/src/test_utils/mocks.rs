//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record the calls they receive so tests can verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Entry, EntryFilter};
use crate::domain::ports::MinifluxClient;
use crate::error::MinifluxError;

// ============================================================================
// Mock Miniflux Client
// ============================================================================

#[derive(Default)]
pub struct MockMinifluxClient {
    entries: Arc<RwLock<Vec<Entry>>>,
    filters: Arc<RwLock<Vec<EntryFilter>>>,
    should_fail: Arc<RwLock<bool>>,
    ignore_limit: Arc<RwLock<bool>>,
}

impl MockMinifluxClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starred entries held by the fake server, newest first
    pub fn with_entries(self, entries: Vec<Entry>) -> Self {
        *self.entries.write().unwrap() = entries;
        self
    }

    /// Make every call fail with a server error
    pub fn failing(self) -> Self {
        *self.should_fail.write().unwrap() = true;
        self
    }

    /// Return all entries regardless of the requested limit
    pub fn ignoring_limit(self) -> Self {
        *self.ignore_limit.write().unwrap() = true;
        self
    }

    pub fn recorded_filters(&self) -> Vec<EntryFilter> {
        self.filters.read().unwrap().clone()
    }
}

#[async_trait]
impl MinifluxClient for MockMinifluxClient {
    async fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, MinifluxError> {
        self.filters.write().unwrap().push(filter.clone());

        if *self.should_fail.read().unwrap() {
            return Err(MinifluxError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }

        let entries = self.entries.read().unwrap();
        let take = if *self.ignore_limit.read().unwrap() {
            entries.len()
        } else {
            filter.limit
        };
        Ok(entries.iter().take(take).cloned().collect())
    }
}
