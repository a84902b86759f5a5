use anyhow::Result;
use sketch2site::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration first (before logging setup)
    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sketch2site=info".into()),
        )
        .init();

    info!("Starting sketch2site on port {}", config.server.port);

    // Start the server
    server::run(config).await?;

    Ok(())
}
