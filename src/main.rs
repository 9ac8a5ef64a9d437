//! Server entry point.
//!
//! Loads environment configuration, initializes tracing, opens the store
//! connection, and serves the router on the fixed service port.

use std::net::SocketAddr;

/// The service always listens here; only the store location is configurable.
const PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let app = batepapo::server::init::create_app().await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
