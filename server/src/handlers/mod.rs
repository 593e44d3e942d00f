//! HTTP handlers
//!
//! Axum request handlers and response layers.

pub mod feed;
pub mod security;

pub use feed::get_starred_feed;
pub use security::with_security_headers;
#[cfg(test)]
pub use feed::ATOM_CONTENT_TYPE;
#[cfg(test)]
pub use security::CONTENT_SECURITY_POLICY;
