//! Feed renderer
//!
//! Renders feed documents to Atom 1.0 XML.

use atom_syndication::{Entry, Feed, FixedDateTime, Link, Person, Text};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::app::{FeedDocument, FeedItem};
use crate::error::RenderError;

/// Render a feed document as an Atom XML string
pub fn render_atom(doc: &FeedDocument) -> Result<String, RenderError> {
    let feed = to_atom_feed(doc);
    let bytes = feed.write_to(Vec::new())?;
    Ok(String::from_utf8(bytes)?)
}

fn to_atom_feed(doc: &FeedDocument) -> Feed {
    let mut feed = Feed::default();
    feed.set_title(xml_safe(&doc.title));
    feed.set_id(xml_safe(&doc.home_link));
    feed.set_updated(fixed(doc.generated_at));
    feed.set_links(vec![alternate_link(&doc.home_link)]);
    feed.set_entries(doc.items.iter().map(to_atom_entry).collect::<Vec<_>>());
    feed
}

fn to_atom_entry(item: &FeedItem) -> Entry {
    let mut entry = Entry::default();
    entry.set_title(xml_safe(&item.title));
    entry.set_id(xml_safe(&entry_id(&item.link, item.created_at)));
    entry.set_links(vec![alternate_link(&item.link)]);
    entry.set_updated(fixed(item.created_at));
    entry.set_published(Some(fixed(item.created_at)));

    // Miniflux content is always HTML
    if !item.description.is_empty() {
        entry.set_summary(Some(Text::html(xml_safe(&item.description))));
    }

    if !item.author_name.is_empty() {
        let mut author = Person::default();
        author.set_name(xml_safe(&item.author_name));
        entry.set_authors(vec![author]);
    }

    entry
}

fn alternate_link(href: &str) -> Link {
    let mut link = Link::default();
    link.set_href(xml_safe(href));
    link.set_rel("alternate");
    link
}

fn fixed(dt: DateTime<Utc>) -> FixedDateTime {
    dt.fixed_offset()
}

/// Replace characters XML 1.0 cannot carry with U+FFFD
fn xml_safe(value: &str) -> String {
    value
        .chars()
        .map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' })
        .collect()
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{A}'
            | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Entry id: a tag URI when there is a link, a random URN otherwise
fn entry_id(link: &str, created_at: DateTime<Utc>) -> String {
    if link.is_empty() {
        return format!("urn:uuid:{}", Uuid::new_v4());
    }
    tag_uri(link, created_at)
}

/// `tag:` URI (RFC 4151) from the link's authority and path
fn tag_uri(link: &str, created_at: DateTime<Utc>) -> String {
    let date = created_at.format("%Y-%m-%d");
    let (authority, path) = match url::Url::parse(link) {
        Ok(url) => {
            let host = url.host_str().unwrap_or_default();
            let authority = match url.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            };
            (authority, url.path().to_string())
        }
        // Relative links have no authority, only a path
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = link.split(['?', '#']).next().unwrap_or_default();
            (String::new(), path.to_string())
        }
        Err(_) => (link.to_string(), "/invalid.html".to_string()),
    };
    format!("tag:{},{}:{}", authority, date, path)
}
