use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ticket_estimator::fares::{FareClient, FareClientConfig};
use ticket_estimator::pricing::Estimator;
use ticket_estimator::web::{AppState, create_router};

/// Address to listen on when `LISTEN_ADDR` is unset.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Pricing service location (defaults to production)
    let mut fare_config = FareClientConfig::new();
    if let Ok(url) = std::env::var("FARE_API_URL") {
        fare_config = fare_config.with_base_url(url);
    }
    info!(base_url = %fare_config.base_url, "using pricing service");

    let fare_client = FareClient::new(fare_config).expect("Failed to create pricing client");
    let estimator = Estimator::new(fare_client);

    let app = create_router(AppState::new(estimator));

    let addr: SocketAddr = std::env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
        .parse()
        .expect("LISTEN_ADDR must be a socket address");

    info!("Ticket estimator listening on http://{addr}");
    info!("  GET  /health           - Health check");
    info!("  POST /estimate         - Price a trip request");
    info!("  POST /seats/available  - Count free seats on a train");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
