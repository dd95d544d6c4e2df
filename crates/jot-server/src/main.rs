//! Entry point for the jot-server binary.

use axum::http::HeaderValue;
use jot_server::{
    config::ServerConfig,
    middleware::request_id::{propagate_request_id, set_request_id},
    routes,
    state::AppState,
};
use jot_store::{Store, StoreConfig, schema};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    init_tracing(&config.log_level);

    tracing::info!(
        port = config.port,
        token_expiry_hours = config.token_expiry_hours,
        "Starting jot-server"
    );

    let store_config = StoreConfig::from_env()?;
    let migrations_enabled = store_config.run_migrations;
    let store = Store::connect(store_config).await?;

    if !migrations_enabled && !schema::is_schema_initialized(store.pool()).await? {
        tracing::warn!("Schema is not initialized and migrations are disabled; requests will fail");
    }

    let cors = build_cors_layer(&config.cors_allowed_origins)?;
    let addr = config.socket_addr();

    // Request ids are stamped on the way in (outermost layer) so the
    // trace span and the response echo both see them.
    let app = routes::build_router(AppState::new(store, config))
        .layer(propagate_request_id())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id());

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins when set; otherwise
/// the configured level applies to everything.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the CORS layer from the configured origin list.
///
/// `"*"` opens the API to any origin; anything else is treated as a
/// comma-separated allowlist, and a malformed entry aborts startup.
fn build_cors_layer(
    allowed_origins: &str,
) -> Result<CorsLayer, axum::http::header::InvalidHeaderValue> {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins == "*" {
        return Ok(cors.allow_origin(Any));
    }

    let origins = allowed_origins
        .split(',')
        .map(|s| s.trim().parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(cors.allow_origin(origins))
}

/// Resolve when the process should shut down (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    };

    #[cfg(unix)]
    let sigterm = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    let reason = tokio::select! {
        _ = ctrl_c => "Ctrl+C",
        _ = sigterm => "SIGTERM",
    };

    tracing::info!("Received {reason}, shutting down");
}
