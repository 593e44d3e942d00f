//! Starred feed service
//!
//! Fetches the starred entries from Miniflux and turns them into a feed
//! document. One upstream call per generated feed, nothing is cached.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::{Entry, EntryFilter};
use crate::domain::ports::MinifluxClient;
use crate::error::{AppError, MinifluxError};

/// A feed ready to be rendered
#[derive(Debug, Clone)]
pub struct FeedDocument {
    pub title: String,
    /// Link back to the Miniflux instance
    pub home_link: String,
    /// Wall clock at transformation time
    pub generated_at: DateTime<Utc>,
    /// Items in upstream order (newest first)
    pub items: Vec<FeedItem>,
}

/// A single feed item, derived 1:1 from an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    /// HTML content, passed through untouched
    pub description: String,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Entry> for FeedItem {
    fn from(entry: &Entry) -> Self {
        FeedItem {
            title: entry.title.clone(),
            link: entry.url.clone(),
            description: entry.content.clone(),
            author_name: entry.author.clone(),
            created_at: entry.published_at,
        }
    }
}

/// Map entries onto a feed document, keeping their order
pub fn build_feed_document(
    title: &str,
    home_link: &str,
    entries: &[Entry],
    generated_at: DateTime<Utc>,
) -> FeedDocument {
    FeedDocument {
        title: title.to_string(),
        home_link: home_link.to_string(),
        generated_at,
        items: entries.iter().map(FeedItem::from).collect(),
    }
}

/// Starred feed service
pub struct StarredFeedService<MC>
where
    MC: MinifluxClient,
{
    miniflux: Arc<MC>,
    title: String,
    home_link: String,
    limit: usize,
}

impl<MC> StarredFeedService<MC>
where
    MC: MinifluxClient,
{
    pub fn new(miniflux: Arc<MC>, title: String, home_link: String, limit: usize) -> Self {
        Self {
            miniflux,
            title,
            home_link,
            limit,
        }
    }

    /// Fetch up to `limit` starred entries, newest first
    pub async fn fetch_starred(&self) -> Result<Vec<Entry>, MinifluxError> {
        let filter = EntryFilter::starred(self.limit);
        let mut entries = self.miniflux.list_entries(&filter).await?;

        if entries.len() > self.limit {
            tracing::warn!(
                requested = self.limit,
                returned = entries.len(),
                "Miniflux returned more entries than requested, truncating"
            );
            entries.truncate(self.limit);
        }

        Ok(entries)
    }

    /// Generate the feed document for the current starred entries
    pub async fn generate_feed(&self) -> Result<FeedDocument, AppError> {
        let entries = self.fetch_starred().await?;
        tracing::debug!(
            count = entries.len(),
            newest = ?entries.first().map(|e| e.id.0),
            "Building starred feed"
        );

        Ok(build_feed_document(
            &self.title,
            &self.home_link,
            &entries,
            Utc::now(),
        ))
    }
}
