//! RSVP HTTP Server Binary
//!
//! This is the main entry point for the RSVP REST API server.
//! It initializes the repository, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin rsvp-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides server.toml, default: 0.0.0.0)
//! - `PORT`: Server port (overrides server.toml, default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use rsvp_rust::db::repositories::LocalRepository;
use rsvp_rust::db::repository::FullRepository;
use rsvp_rust::http::config::ServerConfig;
use rsvp_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting RSVP HTTP Server");

    // Load bind settings; a missing config file is not an error
    let config = match ServerConfig::from_default_location() {
        Ok(config) => config,
        Err(e) => {
            warn!("No server config loaded ({}), using defaults", e);
            ServerConfig::default()
        }
    };

    let repository = Arc::new(LocalRepository::new()) as Arc<dyn FullRepository>;
    info!("Repository initialized successfully");

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address: environment wins over the config file
    let host = env::var("HOST").unwrap_or(config.server.host);
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(config.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
