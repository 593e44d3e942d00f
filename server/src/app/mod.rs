//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod starred_feed_service;

pub use starred_feed_service::{build_feed_document, FeedDocument, FeedItem, StarredFeedService};
