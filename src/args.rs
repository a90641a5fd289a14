use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use thirai_gateway::config::{
    FetcherConfigType, GatewayConfig, HttpFetcherConfig, WebDriverFetcherConfig,
};

#[derive(Parser, Debug)]
#[command(name = "thirai-gateway")]
#[command(about = "JSON gateway over the einthusan movie catalog")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Page fetcher backend
    #[arg(short, long, value_enum)]
    pub fetcher: Option<FetcherArg>,

    /// WebDriver URL, implies the webdriver fetcher
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FetcherArg {
    Http,
    Webdriver,
}

impl Args {
    /// Applies environment and command-line overrides on top of file settings
    pub fn apply(&self, config: &mut GatewayConfig) {
        self.apply_with_env(
            config,
            std::env::var("PORT").ok().as_deref(),
            std::env::var("WEBDRIVER_URL").ok().as_deref(),
        );
    }

    /// Backend choice first, then `PORT` / `WEBDRIVER_URL`, then flags
    pub fn apply_with_env(
        &self,
        config: &mut GatewayConfig,
        port: Option<&str>,
        webdriver_url: Option<&str>,
    ) {
        let is_webdriver = matches!(config.fetcher, FetcherConfigType::WebDriver(_));
        let wants_webdriver = match self.fetcher {
            Some(FetcherArg::Http) => false,
            Some(FetcherArg::Webdriver) => true,
            None => is_webdriver || self.webdriver_url.is_some(),
        };
        if wants_webdriver && !is_webdriver {
            config.fetcher = FetcherConfigType::WebDriver(WebDriverFetcherConfig::default());
        } else if !wants_webdriver && is_webdriver {
            config.fetcher = FetcherConfigType::Http(HttpFetcherConfig::default());
        }

        config.apply_overrides(port, webdriver_url);

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        match &mut config.fetcher {
            FetcherConfigType::Http(cfg) => {
                if let Some(secs) = self.timeout {
                    cfg.timeout_secs = secs;
                }
            }
            FetcherConfigType::WebDriver(cfg) => {
                if let Some(secs) = self.timeout {
                    cfg.timeout_secs = secs;
                }
                if let Some(url) = &self.webdriver_url {
                    cfg.webdriver_url = url.clone();
                }
            }
        }
    }
}
