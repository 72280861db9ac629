//! Fuelplan server - REST backend for motorcycle refuel stop planning

use anyhow::Result;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fuelplan_server::api;
use fuelplan_server::config::Config;
use fuelplan_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fuelplan_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting fuelplan server...");

    let config = Config::from_env();
    if config.google_api_key.is_empty() {
        tracing::warn!("GOOGLE_API_KEY is empty; provider calls will fail");
    }
    let port = config.server_port;
    let state = Arc::new(AppState::new(config));

    let app = api::routes()
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
