use dotenvy::dotenv;

use rest_api::config::app_config::AppConfig;
use rest_api::config::database_config::init_database;
use rest_api::setup::{dependency_injection::DependencyContainer, server::Server};

/// Web application entry point
///
/// Loads configuration, connects the document store, wires dependencies and
/// serves the pages.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database
    let (pool, collections) = init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, collections, &config)?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
