use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use secrecy::SecretString;

use crate::error::ConfigError;

/// Serve the starred entries of a Miniflux account as an Atom feed
///
/// Every flag can also be set through the environment variable named in its
/// help text. A non-empty environment value wins over the flag.
#[derive(Parser, Debug, Clone)]
#[command(name = "starfeed", version, about)]
pub struct Config {
    /// Miniflux server endpoint [env: MINIFLUX_ENDPOINT]
    #[arg(long, default_value = "https://miniflux.example.org")]
    pub endpoint: String,

    /// Load the Miniflux API token from this file [env: MINIFLUX_API_TOKEN_FILE]
    #[arg(long, value_name = "FILE", default_value = "api_token")]
    pub api_token_file: PathBuf,

    /// Listen on this address [env: LISTEN_ADDR]
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub listen_addr: String,

    /// Title of the Atom feed [env: FEED_TITLE]
    #[arg(long, default_value = "Starred entries")]
    pub feed_title: String,

    /// TLS certificate file path, skip to disable TLS [env: TLS_CERT]
    #[arg(long, value_name = "FILE")]
    pub tls_cert: Option<PathBuf>,

    /// TLS key file path, skip to disable TLS [env: TLS_KEY]
    #[arg(long, value_name = "FILE")]
    pub tls_key: Option<PathBuf>,

    /// Maximum number of entries to return [env: LIMIT]
    #[arg(long, default_value_t = 100)]
    pub limit: usize,

    /// Give up on Miniflux after this many seconds [env: FETCH_TIMEOUT]
    #[arg(long, value_name = "SECONDS")]
    pub fetch_timeout: Option<u64>,
}

impl Config {
    /// Load from `.env`, the command line and the environment
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        let mut config = Self::parse();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Overwrite fields with non-empty values from `lookup`.
    /// Unparseable numbers are skipped with a warning.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(value) = get("MINIFLUX_ENDPOINT") {
            self.endpoint = value;
        }
        if let Some(value) = get("MINIFLUX_API_TOKEN_FILE") {
            self.api_token_file = PathBuf::from(value);
        }
        if let Some(value) = get("LISTEN_ADDR") {
            self.listen_addr = value;
        }
        if let Some(value) = get("FEED_TITLE") {
            self.feed_title = value;
        }
        if let Some(value) = get("TLS_CERT") {
            self.tls_cert = Some(PathBuf::from(value));
        }
        if let Some(value) = get("TLS_KEY") {
            self.tls_key = Some(PathBuf::from(value));
        }
        if let Some(value) = get("LIMIT") {
            match value.parse() {
                Ok(limit) => self.limit = limit,
                Err(_) => tracing::warn!(value = %value, "Ignoring invalid LIMIT"),
            }
        }
        if let Some(value) = get("FETCH_TIMEOUT") {
            match value.parse() {
                Ok(secs) => self.fetch_timeout = Some(secs),
                Err(_) => tracing::warn!(value = %value, "Ignoring invalid FETCH_TIMEOUT"),
            }
        }
    }

    /// Certificate and key, only when both are set
    pub fn tls_paths(&self) -> Option<(&Path, &Path)> {
        match (&self.tls_cert, &self.tls_key) {
            (Some(cert), Some(key))
                if !cert.as_os_str().is_empty() && !key.as_os_str().is_empty() =>
            {
                Some((cert.as_path(), key.as_path()))
            }
            _ => None,
        }
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout.map(Duration::from_secs)
    }

    /// Parse the listen address; `:8080` binds every interface
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = if self.listen_addr.starts_with(':') {
            format!("0.0.0.0{}", self.listen_addr)
        } else {
            self.listen_addr.clone()
        };

        addr.parse().map_err(|source| ConfigError::ListenAddr {
            addr: self.listen_addr.clone(),
            source,
        })
    }
}

/// Read the API token, trimming surrounding whitespace.
/// An empty token is allowed but every Miniflux call will fail with 401.
pub fn read_api_token(path: &Path) -> Result<SecretString, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::TokenFile {
        path: path.to_path_buf(),
        source,
    })?;

    let token = raw.trim();
    if token.is_empty() {
        tracing::warn!(path = %path.display(), "API token file is empty");
    }

    Ok(SecretString::from(token.to_string()))
}
