//! Parking HTTP Server Binary
//!
//! This is the main entry point for the parking REST API server.
//! It loads the lot layout, constructs the engine, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin parking-server
//!
//! # With a custom lot layout
//! LOT_CONFIG=parking.toml cargo run --bin parking-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `LOT_CONFIG`: Path to a TOML lot layout file (optional)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use parking_rust::config::LotConfig;
use parking_rust::engine::ParkingEngine;
use parking_rust::http::{create_router, AppState};

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
        .init();

    info!("Starting parking HTTP server");

    // Load the lot layout and fail fast on mismatched dimensions.
    let config = LotConfig::load()?;
    let engine = ParkingEngine::new(&config)?;
    info!(
        entry_points = config.entry_points,
        slots = config.slot_count(),
        "Lot initialized"
    );

    // Create application state and router
    let state = AppState::new(engine);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
