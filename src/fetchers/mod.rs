use crate::config::FetcherConfigType;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub mod http;
pub mod webdriver;

pub use http::HttpFetcher;
pub use webdriver::WebDriverFetcher;

/// Downloads the raw HTML of a catalog page.
///
/// One call is one upstream request: implementations do not cache and do
/// not retry.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return its body as text
    async fn fetch(&self, url: &str) -> Result<String>;

    /// Backend name for log lines
    fn name(&self) -> &'static str;
}

/// Builds the fetcher selected by the configuration
pub fn from_config(config: &FetcherConfigType) -> Result<Arc<dyn PageFetcher>> {
    let fetcher: Arc<dyn PageFetcher> = match config {
        FetcherConfigType::Http(cfg) => Arc::new(HttpFetcher::new(cfg)?),
        FetcherConfigType::WebDriver(cfg) => Arc::new(WebDriverFetcher::new(cfg)),
    };
    ::log::info!("Using {} page fetcher", fetcher.name());
    Ok(fetcher)
}
