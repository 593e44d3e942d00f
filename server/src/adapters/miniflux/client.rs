//! Miniflux API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::entities::{Entry, EntryFilter, EntryId};
use crate::domain::ports::MinifluxClient;
use crate::error::MinifluxError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Implementation of the Miniflux API client
pub struct MinifluxClientImpl {
    http: Client,
    base_url: String,
    api_token: SecretString,
}

impl MinifluxClientImpl {
    pub fn new(
        base_url: &str,
        api_token: SecretString,
        timeout: Option<Duration>,
    ) -> Result<Self, MinifluxError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: normalize_endpoint(base_url),
            api_token,
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/v1{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, MinifluxError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| MinifluxError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(MinifluxError::Unauthorized)
        } else if status.as_u16() == 403 {
            Err(MinifluxError::Forbidden)
        } else if status.as_u16() == 404 {
            Err(MinifluxError::NotFound)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(MinifluxError::Api {
                status: status.as_u16(),
                message: error_message(body),
            })
        }
    }
}

/// Strip trailing slashes and an explicit `/v1` suffix from the endpoint
fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim().trim_end_matches('/');
    trimmed
        .strip_suffix("/v1")
        .unwrap_or(trimmed)
        .trim_end_matches('/')
        .to_string()
}

/// Miniflux wraps errors as `{"error_message": "..."}`
fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(parsed) => parsed.error_message,
        Err(_) => body,
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error_message: String,
}

/// Response types from Miniflux API
#[derive(Deserialize)]
struct EntriesResponse {
    total: i64,
    entries: Vec<EntryResponse>,
}

#[derive(Deserialize)]
struct EntryResponse {
    id: i64,
    title: String,
    url: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: String,
    published_at: DateTime<Utc>,
}

impl From<EntryResponse> for Entry {
    fn from(r: EntryResponse) -> Self {
        Entry {
            id: EntryId(r.id),
            title: r.title,
            url: r.url,
            content: r.content,
            author: r.author,
            published_at: r.published_at,
        }
    }
}

#[async_trait]
impl MinifluxClient for MinifluxClientImpl {
    async fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>, MinifluxError> {
        let mut query = vec![
            ("limit", filter.limit.to_string()),
            ("order", filter.order.to_string()),
            ("direction", filter.direction.to_string()),
        ];
        if filter.starred {
            query.push(("starred", "1".to_string()));
        }

        let resp = self
            .http
            .get(self.api_url("/entries"))
            .header("X-Auth-Token", self.api_token.expose_secret())
            .query(&query)
            .send()
            .await?;

        let body: EntriesResponse = self.handle_response(resp).await?;
        tracing::debug!(
            total = body.total,
            returned = body.entries.len(),
            "Fetched entries from Miniflux"
        );

        Ok(body.entries.into_iter().map(Entry::from).collect())
    }
}
