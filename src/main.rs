use anyhow::{Context, Result};
use dotenv::dotenv;
use order_api::{config::Config, handler::AppRouter, state::AppState, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("order-api", is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let state = AppState::new();

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
