//! Miniflux adapter
//!
//! Implementation of the Miniflux API client.

pub mod client;

pub use client::MinifluxClientImpl;
