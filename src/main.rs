use color_eyre::eyre::Result;
use dotenv::dotenv;
use schoolhub_api::config::ApiConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Start API server
    schoolhub_api::start_server(config.clone()).await?;
    info!("Server on {} shut down", config.server_addr());

    Ok(())
}
