//! Cache Node - one node of a distributed in-memory cache
//!
//! Serves get/set/delete over HTTP from a hash table owned by a single
//! event loop, and optionally announces itself to a registry.

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache_node::{create_router, spawn_event_loop, AppState, Config, RegistryClient};

/// Main entry point for the cache node.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the hash table and spawn its event loop
/// 4. Register with the registry, if one is configured
/// 5. Start HTTP server on configured address
/// 6. On SIGINT/SIGTERM: stop the loop, wait for it to drain, unregister
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cache_node=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cache node");

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, resize_threshold={}, resize_coefficient={}, queue_capacity={}, port={}",
        config.initial_capacity,
        config.resize_threshold,
        config.resize_coefficient,
        config.queue_capacity,
        config.server_port
    );

    let (events, loop_task) =
        spawn_event_loop(&config).context("Invalid cache configuration")?;

    let registry = config
        .registry_url
        .as_ref()
        .map(|url| RegistryClient::new(url.clone(), config.advertised_url()));
    if let Some(registry) = &registry {
        info!("Registering {} with the registry", registry.node_url());
        if !registry.register().await {
            warn!("Registration failed, continuing without registry");
        }
    }

    let app = create_router(AppState::new(events.clone()));

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    events.stop();
    let cache = loop_task.await.context("Event loop task failed")?;
    info!("Event loop stopped with {} entries", cache.len());

    if let Some(registry) = &registry {
        if !registry.unregister().await {
            warn!("Unregistration failed");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
