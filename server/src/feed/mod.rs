//! Feed module
//!
//! Atom rendering of starred feed documents.

pub mod renderer;

pub use renderer::render_atom;
