//! Stream URL extraction - fetch an embed page and pull out its video source.
//!
//! Every failure along the way (bad URL, network error, missing source tag)
//! is logged and turned into `None`. Callers only ever see the stream URL or
//! its absence.

use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ExtractError;
use crate::fetch::fetch_page;
use crate::html::find_stream_source;
use crate::util::user_agent::{build_headers, pick_user_agent};

/// Reusable extractor holding a shared HTTP client.
#[derive(Debug, Clone)]
pub struct StreamExtractor {
    client: Client,
    config: Config,
}

impl StreamExtractor {
    /// Create an extractor with its own HTTP client.
    pub fn new(config: Config) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .gzip(true)
            .build()
            .map_err(ExtractError::Client)?;

        Ok(Self::with_client(client, config))
    }

    /// Create an extractor around an existing HTTP client.
    pub fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch `url` and return the stream URL of its `video/mp4` source tag.
    pub async fn try_extract(&self, url: &str) -> Result<String, ExtractError> {
        let user_agent = pick_user_agent(self.config.user_agent_pool.as_deref());
        let headers = build_headers(&user_agent);

        let html = fetch_page(&self.client, url, &headers, self.config.request_timeout()).await?;

        find_stream_source(&html).ok_or(ExtractError::NoMatch)
    }

    /// Fetch `url` and return its stream URL, or `None` on any failure.
    pub async fn extract_stream_url(&self, url: &str) -> Option<String> {
        match self.try_extract(url).await {
            Ok(stream_url) => {
                info!(url = url, stream_url = %stream_url, found = true, "stream_url_result");
                Some(stream_url)
            }
            Err(ExtractError::NoMatch) => {
                info!(url = url, found = false, "stream_url_result");
                info!(url = url, "stream_url_not_found");
                None
            }
            Err(e) => {
                warn!(url = url, error = %e, "stream_url_fetch_error");
                None
            }
        }
    }
}

/// Extract the stream URL from a Vidoza embed page using default settings.
///
/// Returns `None` if the page cannot be fetched or contains no
/// `video/mp4` source tag. Never returns an error.
pub async fn extract_stream_url(url: &str) -> Option<String> {
    match StreamExtractor::new(Config::default()) {
        Ok(extractor) => extractor.extract_stream_url(url).await,
        Err(e) => {
            warn!(url = url, error = %e, "stream_url_fetch_error");
            None
        }
    }
}
