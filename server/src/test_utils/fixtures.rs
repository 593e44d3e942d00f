//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::entities::{Entry, EntryId};

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

/// Create a test entry; higher `n` means older
pub fn test_entry(n: i64) -> Entry {
    Entry {
        id: EntryId(1000 - n),
        title: format!("Article {}", n),
        url: format!("https://blog.example.com/posts/article-{}", n),
        content: format!("<p>Body of <em>article</em> {}</p>", n),
        author: format!("Author {}", n),
        published_at: base_date() - Duration::hours(n),
    }
}

/// Create `count` entries ordered newest first
pub fn test_entries(count: usize) -> Vec<Entry> {
    (0..count as i64).map(test_entry).collect()
}
