//! Starfeed Server
//!
//! Serves the starred entries of a Miniflux account as an Atom feed.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::MinifluxClientImpl;
use app::StarredFeedService;
use config::Config;
use domain::ports::MinifluxClient;

/// Application state shared across all handlers
pub struct AppState<MC>
where
    MC: MinifluxClient,
{
    pub feed_service: Arc<StarredFeedService<MC>>,
}

impl<MC> Clone for AppState<MC>
where
    MC: MinifluxClient,
{
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
        }
    }
}

/// Every method and path is answered with the starred feed
pub fn build_router<MC>(state: AppState<MC>) -> Router
where
    MC: MinifluxClient + 'static,
{
    let app = Router::new()
        .fallback(handlers::get_starred_feed::<MC>)
        .with_state(state);

    handlers::with_security_headers(app).layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,starfeed=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load();

    if let Err(e) = run(config).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let api_token = config::read_api_token(&config.api_token_file)?;
    let addr = config.socket_addr()?;

    // Create adapters
    let miniflux = Arc::new(
        MinifluxClientImpl::new(&config.endpoint, api_token, config.fetch_timeout())
            .context("Failed to build Miniflux client")?,
    );

    // Create application services
    let feed_service = Arc::new(StarredFeedService::new(
        miniflux,
        config.feed_title.clone(),
        config.endpoint.clone(),
        config.limit,
    ));

    let app = build_router(AppState { feed_service });

    match config.tls_paths() {
        Some((cert, key)) => {
            let tls = RustlsConfig::from_pem_file(cert, key)
                .await
                .with_context(|| {
                    format!(
                        "Failed to load TLS material from {} and {}",
                        cert.display(),
                        key.display()
                    )
                })?;

            tracing::info!(
                "Listening on https://{} with limit {}",
                addr,
                config.limit
            );
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await
                .context("Server error")?;
        }
        None => {
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;

            tracing::info!("Listening on http://{} with limit {}", addr, config.limit);
            axum::serve(listener, app).await.context("Server error")?;
        }
    }

    Ok(())
}
