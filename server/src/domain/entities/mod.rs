//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod entry;

pub use entry::{Entry, EntryFilter, EntryId};
