//! Finboard API Server
//!
//! Run with: cargo run --bin finboard-api
//!
//! Serves `GET /transactions` with the balance computed over a fixed list.
//!
//! # Configuration
//!
//! Read from `finboard.toml` (see `finboard config`), then overridden by
//! environment variables:
//! - `FINBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `FINBOARD_PORT`: Port to listen on (default: 3333)
//! - `FINBOARD_FIXTURE`: JSON fixture to serve (default: built-in demo data)
//! - `FINBOARD_LOG_LEVEL`: Log level (default: info)
//! - `FINBOARD_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full filter directive, wins over the level above

use std::path::Path;

use finboard::api::{serve, AppState, TransactionStore};
use finboard::config::Config;
use finboard::logging::{init_logging, with_startup_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = with_startup_logging(Config::load_default);
    init_logging(&config.logging);

    tracing::info!("Starting Finboard API server v{}", env!("CARGO_PKG_VERSION"));

    let store = TransactionStore::load(config.server.fixture.as_deref().map(Path::new))?;
    tracing::info!("Serving {} transactions", store.len());

    let api_config = config.server.api_config();
    if api_config.cors_origins.is_empty() {
        tracing::info!("CORS: any origin");
    } else {
        tracing::info!("CORS origins: {:?}", api_config.cors_origins);
    }

    serve(AppState::new(store, api_config.clone()), &api_config).await?;

    Ok(())
}
