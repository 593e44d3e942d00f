//! Unified error types for the starred feed server
//!
//! This module defines error types for each layer:
//! - `ConfigError`: Startup configuration errors
//! - `MinifluxError`: Miniflux API client errors
//! - `RenderError`: Atom serialization errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Configuration errors - fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read API token file {path}: {source}")]
    TokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid listen address {addr}: {source}")]
    ListenAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Miniflux API client errors
#[derive(Debug, Error)]
pub enum MinifluxError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid API token")]
    Unauthorized,

    #[error("Forbidden - API token lacks access")]
    Forbidden,

    #[error("Resource not found")]
    NotFound,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Atom rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Atom write failed: {0}")]
    Atom(#[from] atom_syndication::Error),

    #[error("Rendered feed is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Miniflux error: {0}")]
    Miniflux(#[from] MinifluxError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Miniflux(e) => {
                tracing::error!("Miniflux error: {}", e);
                match e {
                    MinifluxError::Unauthorized | MinifluxError::Forbidden => (
                        StatusCode::BAD_GATEWAY,
                        "Upstream rejected credentials",
                        None,
                    ),
                    MinifluxError::Api { status, message } => (
                        StatusCode::BAD_GATEWAY,
                        "Upstream error",
                        Some(format!("{} - {}", status, message)),
                    ),
                    _ => (StatusCode::BAD_GATEWAY, "Upstream error", None),
                }
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
