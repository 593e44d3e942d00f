//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod miniflux;

pub use miniflux::MinifluxClientImpl;
