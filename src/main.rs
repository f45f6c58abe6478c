//! Pay Raise Engine HTTP server.

use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payraise_engine::api::{AppState, create_router};
use payraise_engine::config::ConfigLoader;
use payraise_engine::storage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ConfigLoader::from_env()?;
    let storage = storage::connect(&config.config().storage, config.benchmarks()).await;
    let bind_address = config.config().server.bind_address.clone();

    let app = create_router(AppState::new(config, storage));
    let listener = TcpListener::bind(&bind_address).await?;
    info!(address = %bind_address, "Pay Raise Engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
