use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::fetchers::PageFetcher;
use crate::intent::{Category, Intent, RatingBands};
use crate::parsers::{listing, watch};
use crate::query;
use crate::ranker;
use crate::results::{
    ActorResponse, BrowseResponse, ListingResult, MovieEntry, SearchResponse, WatchResponse,
};
use std::sync::Arc;

/// Runs each intent through translate -> fetch -> extract (-> rank).
///
/// Holds no per-request state; clones share the fetcher.
#[derive(Clone)]
pub struct Gateway {
    base_url: String,
    cdn_host: String,
    fetcher: Arc<dyn PageFetcher>,
}

impl Gateway {
    pub fn new(config: &GatewayConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            cdn_host: config.cdn_host.clone(),
            fetcher,
        }
    }

    /// Upstream URL for an intent
    pub fn url_for(&self, intent: &Intent) -> String {
        query::build_url(&self.base_url, intent)
    }

    /// Fetches and extracts the listing page behind a listing intent
    pub async fn listing(&self, intent: &Intent) -> Result<Vec<MovieEntry>> {
        let url = self.url_for(intent);
        ::log::info!("{} listing: {}", intent.kind(), url);

        let html = self.fetcher.fetch(&url).await?;
        listing::parse(&html, &self.base_url)
    }

    async fn paged(&self, intent: Intent, language: String) -> Result<ListingResult> {
        let movies = self.listing(&intent).await?;
        Ok(ListingResult::new(language, intent.page(), movies))
    }

    /// Free-text search, ranked by closeness to the query.
    /// An empty query returns no movies without touching upstream.
    pub async fn search(&self, language: &str, q: &str) -> Result<SearchResponse> {
        let movies = if q.is_empty() {
            Vec::new()
        } else {
            let intent = Intent::Search {
                language: language.to_string(),
                query: q.to_string(),
            };
            ranker::rank(q, self.listing(&intent).await?)
        };

        Ok(SearchResponse {
            language: language.to_string(),
            movies,
            query: q.to_string(),
        })
    }

    /// `category_label` is echoed back as given (lower-cased by the caller)
    pub async fn browse(
        &self,
        language: &str,
        category_label: &str,
        page: u32,
    ) -> Result<BrowseResponse> {
        let intent = Intent::Browse {
            language: language.to_string(),
            category: Category::from_param(category_label),
            page,
        };
        let result = self.paged(intent, language.to_string()).await?;
        Ok(result.into_browse(category_label.to_string()))
    }

    pub async fn actor(&self, language: &str, actor_code: &str, page: u32) -> Result<ActorResponse> {
        let intent = Intent::Actor {
            language: language.to_string(),
            actor_code: actor_code.to_string(),
            page,
        };
        let result = self.paged(intent, language.to_string()).await?;
        Ok(result.into_actor(actor_code.to_string()))
    }

    pub async fn genre(&self, language: &str, bands: RatingBands, page: u32) -> Result<BrowseResponse> {
        let intent = Intent::Genre {
            language: language.to_string(),
            bands,
            page,
        };
        let result = self.paged(intent, language.to_string()).await?;
        Ok(result.into_browse("Genre".to_string()))
    }

    pub async fn decade(&self, language: &str, decade: &str, page: u32) -> Result<BrowseResponse> {
        let intent = Intent::Decade {
            language: language.to_string(),
            decade: decade.to_string(),
            page,
        };
        let result = self.paged(intent, language.to_string()).await?;
        Ok(result.into_browse(format!("Decade: {}", decade)))
    }

    pub async fn year(&self, language: &str, year: &str, page: u32) -> Result<BrowseResponse> {
        let intent = Intent::Year {
            language: language.to_string(),
            year: year.to_string(),
            page,
        };
        let result = self.paged(intent, language.to_string()).await?;
        Ok(result.into_browse(format!("Year: {}", year)))
    }

    /// Resolves a title's watch page to its playable address
    pub async fn watch(&self, page_url: &str) -> Result<WatchResponse> {
        if page_url.is_empty() {
            return Err(GatewayError::Validation(
                "URL parameter is required".to_string(),
            ));
        }

        let intent = Intent::Watch {
            page_url: page_url.to_string(),
        };
        let url = self.url_for(&intent);
        ::log::info!("watch: {}", url);

        let html = self.fetcher.fetch(&url).await?;
        watch::parse(&html, &self.cdn_host)
    }
}
