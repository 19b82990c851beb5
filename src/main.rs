use item_registry::{ItemsConfig, ItemsServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_path = "/api";
    let config = ItemsConfig::seeded()
        .with_base_path(base_path)
        .with_port(8080);
    let server = ItemsServer::new(config).await?;
    tracing::info!("Serving items at {}{}/items", server.url(), base_path);

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    Ok(())
}
