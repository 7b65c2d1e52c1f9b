//! Restaurant Search - restaurant lookups with a TTL cache in front of the
//! Places API

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use restaurant_search::api::create_router;
use restaurant_search::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the restaurant search server.
///
/// # Startup Sequence
/// 1. Load `.env` (if present) and configuration from environment variables
/// 2. Initialize tracing subscriber for logging
/// 3. Pick the Places client and create the cache
/// 4. Start background TTL cleanup task
/// 5. Serve HTTP until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal
    let dotenv = dotenvy::dotenv();

    let config = Config::from_env();

    // RUST_LOG overrides the debug-flag default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Restaurant Search server");
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, cleanup_interval={}s, api_key={}, debug={}",
        config.server_port,
        config.cache_ttl,
        config.cleanup_interval,
        if config.has_api_key() { "set" } else { "unset" },
        config.debug
    );

    let state = AppState::from_config(&config).context("failed to initialize Places client")?;
    info!(
        "Cache store initialized, using {} Places client",
        state.dispatcher.client_name()
    );

    let cleanup_handle = spawn_cleanup_task(state.dispatcher.cache(), config.cleanup_interval);
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
/// The cache is dropped with the process.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
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

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
