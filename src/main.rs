//! Gallery Cache - gallery endpoint backed by a bounded response cache
//!
//! Serves the media gallery listing with ETag / If-None-Match support.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gallery_cache::api::{create_router, AppState};
use gallery_cache::media::{HttpMediaSource, MediaSource};
use gallery_cache::Config;

/// Main entry point for the gallery server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the upstream media source
/// 4. Create the gallery cache and wire it into the request handler
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gallery_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting gallery server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_capacity={}, cache_ttl={}s, port={}",
        config.cache_capacity, config.cache_ttl, config.server_port
    );

    let presence = config.media.credential_presence();
    if !presence.all_present() {
        // Not fatal: each gallery request reports the missing credentials
        warn!(
            missing = ?presence.missing(),
            "media provider credentials incomplete"
        );
    }

    let source: Arc<dyn MediaSource> = Arc::new(
        HttpMediaSource::new(config.media.clone()).context("failed to build media source")?,
    );

    // The cache lives exactly as long as this state
    let state = AppState::from_config(&config, source);
    info!("Gallery cache initialized");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
