use crate::config::WebDriverFetcherConfig;
use crate::error::{GatewayError, Result};
use crate::fetchers::PageFetcher;
use crate::utils::request_timeout;
use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::timeout;

/// Local driver ports tried when the configured WebDriver is unreachable
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444",
];

/// Fetches pages through a WebDriver-controlled browser.
///
/// Each fetch opens its own session and closes it afterwards, so concurrent
/// requests never share browser state.
pub struct WebDriverFetcher {
    webdriver_url: String,
    timeout: Duration,
}

impl WebDriverFetcher {
    pub fn new(config: &WebDriverFetcherConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            timeout: request_timeout(config.timeout_secs),
        }
    }

    async fn navigate(client: &Client, url: &str) -> Result<String> {
        client.goto(url).await.map_err(|e| navigation_error(e, "accessing", url))?;
        client
            .source()
            .await
            .map_err(|e| navigation_error(e, "getting source for", url))
    }
}

#[async_trait]
impl PageFetcher for WebDriverFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let start = std::time::Instant::now();
        ::log::debug!("WebDriver GET {}", url);

        let client = connect_to_webdriver(&self.webdriver_url).await?;

        let result = match timeout(self.timeout, Self::navigate(&client, url)).await {
            Ok(result) => result,
            Err(_) => {
                ::log::error!("Timeout fetching: {}", url);
                Err(GatewayError::Fetch(format!(
                    "timed out after {}s fetching {}",
                    self.timeout.as_secs(),
                    url
                )))
            }
        };

        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }

        if result.is_ok() {
            ::log::debug!(
                "Fetched {} via WebDriver in {:.2} seconds",
                url,
                start.elapsed().as_secs_f64()
            );
        }
        result
    }

    fn name(&self) -> &'static str {
        "webdriver"
    }
}

/// Connects to the configured WebDriver, then to the usual local ports
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client> {
    let first_error = match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
            e
        }
    };

    for url in FALLBACK_WEBDRIVER_URLS.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(GatewayError::from(first_error))
}

/// Maps a navigation failure to a fetch error, flagging lost sessions
fn navigation_error(error: fantoccini::error::CmdError, context: &str, url: &str) -> GatewayError {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while {} {}", context, url);
    } else {
        ::log::error!("Failed {} {}: {}", context, url, error);
    }
    GatewayError::from(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_config() {
        let fetcher = WebDriverFetcher::new(&WebDriverFetcherConfig {
            webdriver_url: "http://driver:4444".to_string(),
            timeout_secs: 12,
        });
        assert_eq!(fetcher.webdriver_url, "http://driver:4444");
        assert_eq!(fetcher.timeout, Duration::from_secs(12));
        assert_eq!(fetcher.name(), "webdriver");
    }

    #[test]
    fn test_fallbacks_do_not_repeat_default() {
        // The configured default is tried first, fallbacks must differ from it
        let default = WebDriverFetcherConfig::default().webdriver_url;
        assert!(!FALLBACK_WEBDRIVER_URLS.contains(&default.as_str()));
    }
}
