mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod stateless_llm;
mod translate;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chat_translator=debug,tower_http=debug")),
        )
        .init();

    // A missing file is fine; environment variables cover everything
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "conf".to_string());
    let config = Config::load(&config_path)?;
    info!(
        "Loaded configuration (model={}, base_url={})",
        config.llm.model, config.llm.base_url
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app_state = AppState::new(config);

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
