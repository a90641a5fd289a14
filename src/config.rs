use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Top-level gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Origin of the movie catalog, used for listing URLs and relative links
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Hostname substituted for raw IPv4 delivery nodes in video links
    #[serde(default = "default_cdn_host")]
    pub cdn_host: String,

    /// Listening address of the HTTP façade
    #[serde(default)]
    pub server: ServerConfig,

    /// Browser origins allowed by CORS
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Backend used to download catalog pages
    #[serde(default)]
    pub fetcher: FetcherConfigType,
}

/// Configuration for the HTTP listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Configuration for the plain HTTP page fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpFetcherConfig {
    /// User-Agent header sent upstream
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Configuration for the WebDriver page fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebDriverFetcherConfig {
    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Navigation plus page-source timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Enum containing all fetcher configuration types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FetcherConfigType {
    /// reqwest-based fetcher
    Http(HttpFetcherConfig),

    /// fantoccini-based fetcher driving a real browser
    WebDriver(WebDriverFetcherConfig),
}

impl Default for FetcherConfigType {
    fn default() -> Self {
        FetcherConfigType::Http(HttpFetcherConfig::default())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for HttpFetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for WebDriverFetcherConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cdn_host: default_cdn_host(),
            server: ServerConfig::default(),
            cors_origins: default_cors_origins(),
            fetcher: FetcherConfigType::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://einthusan.tv".to_string()
}

fn default_cdn_host() -> String {
    "cdn1.einthusan.io".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "https://thirai.me".to_string(),
        "http://thirai.me".to_string(),
        "https://www.thirai.me".to_string(),
    ]
}

fn default_user_agent() -> String {
    concat!("thirai-gateway/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

impl GatewayConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| GatewayError::Config(format!("{}: {}", path.display(), e)))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| GatewayError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GatewayError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| GatewayError::Config(format!("base_url '{}': {}", self.base_url, e)))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(GatewayError::Config(format!(
                "base_url '{}' must be http or https",
                self.base_url
            )));
        }
        if self.cdn_host.trim().is_empty() {
            return Err(GatewayError::Config("cdn_host is empty".to_string()));
        }
        Ok(())
    }

    /// Applies `PORT` and `WEBDRIVER_URL` values. The WebDriver URL only
    /// lands if the WebDriver fetcher is already selected.
    pub fn apply_overrides(&mut self, port: Option<&str>, webdriver_url: Option<&str>) {
        if let Some(port) = port.filter(|p| !p.is_empty()) {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => ::log::warn!("Ignoring invalid PORT value '{}'", port),
            }
        }

        if let (Some(url), FetcherConfigType::WebDriver(cfg)) =
            (webdriver_url.filter(|u| !u.is_empty()), &mut self.fetcher)
        {
            cfg.webdriver_url = url.to_string();
        }
    }
}
