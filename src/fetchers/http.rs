use crate::config::HttpFetcherConfig;
use crate::error::{GatewayError, Result};
use crate::fetchers::PageFetcher;
use crate::utils::request_timeout;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches pages with a plain HTTP GET
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the configured user agent and timeout
    pub fn new(config: &HttpFetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(request_timeout(config.timeout_secs))
            .build()
            .map_err(|e| GatewayError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let start = std::time::Instant::now();
        ::log::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            ::log::error!("Failed to fetch {}: {}", url, e);
            GatewayError::from(e)
        })?;

        // Error pages are still HTML; the extractors decide what they contain
        let status = response.status();
        if !status.is_success() {
            ::log::warn!("Upstream answered {} for {}", status, url);
        }

        let body = response.text().await.map_err(|e| {
            ::log::error!("Failed to read body of {}: {}", url, e);
            GatewayError::from(e)
        })?;

        ::log::debug!(
            "Fetched {} ({} bytes) in {:.2} seconds",
            url,
            body.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(body)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
