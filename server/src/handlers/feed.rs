//! Feed handler
//!
//! Serves the starred entries as an Atom document.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::domain::ports::MinifluxClient;
use crate::error::AppError;
use crate::feed::render_atom;
use crate::AppState;

pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml; charset=utf-8";

/// Any method, any path
///
/// Fetches the starred entries and returns them as Atom.
/// - Upstream failure → 502, no item data
/// - Render failure → 500, the server keeps running
pub async fn get_starred_feed<MC>(State(state): State<AppState<MC>>) -> Result<Response, AppError>
where
    MC: MinifluxClient + 'static,
{
    let feed = state.feed_service.generate_feed().await?;
    let body = render_atom(&feed)?;

    tracing::debug!(items = feed.items.len(), bytes = body.len(), "Serving starred feed");

    Ok(([(header::CONTENT_TYPE, ATOM_CONTENT_TYPE)], body).into_response())
}
