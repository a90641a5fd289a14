use clap::Parser;
use thirai_gateway::config::GatewayConfig;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // File settings first, then PORT / WEBDRIVER_URL, then flags
    let mut config = match &args.config {
        Some(path) => match GatewayConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        },
        None => GatewayConfig::default(),
    };
    args.apply(&mut config);

    ::log::info!(
        "Starting gateway for {} on {}:{}",
        config.base_url,
        config.server.host,
        config.server.port
    );

    if let Err(e) = thirai_gateway::run(config).await {
        ::log::error!("Gateway stopped: {}", e);
        std::process::exit(1);
    }
}
