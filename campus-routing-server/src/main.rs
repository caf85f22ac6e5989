//! HTTP front end for the campus pedestrian routing core.

mod config;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use campus_routing_core::loading::load_snapshot;
use clap::Parser;
use tower::{BoxError, ServiceBuilder};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::routes::AppState;

#[derive(Parser, Debug)]
#[command(about = "Walking-route service for the campus navigation app")]
struct Args {
    /// Path to the TOML server configuration.
    #[arg(short, long, default_value = "server.toml")]
    config: PathBuf,
    /// Listen address override, e.g. "127.0.0.1:8080".
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = ServerConfig::from_file(&args.config)?;
    let listen = args.listen.unwrap_or_else(|| config.listen.clone());

    let snapshot = load_snapshot(&config.snapshot_config())?;
    let state = Arc::new(AppState {
        snapshot,
        routing: config.routing_config(),
    });

    let middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .timeout(Duration::from_secs(config.limits.request_timeout_s))
        .concurrency_limit(config.limits.max_in_flight);

    let app = routes::router(state)
        .layer(middleware)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    tracing::info!("Listening on {listen}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (
            StatusCode::REQUEST_TIMEOUT,
            "Request took too long".to_string(),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "Service overloaded".to_string(),
        )
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {err}");
    }
}
