mod refresh;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use post318_core::catalog;
use post318_core::config::ServerConfig;

use crate::state::AppState;

const DEFAULT_CONFIG_PATH: &str = "post318.toml";

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::var("POST318_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = ServerConfig::load(&config_path)?;
    let port = config.port;

    let state = AppState::new(config, catalog::default_rules());

    // The site is served from a different origin than this API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::events::router())
        .with_state(state.clone())
        .layer(cors);

    tokio::spawn(refresh::run(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("post318-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
