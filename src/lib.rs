// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod gateway;
pub mod intent;
pub mod parsers;
pub mod query;
pub mod ranker;
pub mod results;
pub mod server;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::GatewayError;
pub use gateway::Gateway;
pub use intent::{Category, Intent, RatingBands};
pub use results::{MovieEntry, WatchResponse};

use crate::config::GatewayConfig;

/// Builds the fetcher, gateway and router described by `config` and serves
/// HTTP until the process stops
pub async fn run(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let fetcher = fetchers::from_config(&config.fetcher)?;
    let gateway = Gateway::new(&config, fetcher);
    let router = server::router(gateway, &config.cors_origins);

    server::serve(router, &config.server.host, config.server.port).await?;
    Ok(())
}
