//! Error types for the extraction pipeline.
//!
//! These never cross the public `extract_stream_url` boundary; they exist so
//! the pipeline can use `?` internally and log a precise reason before the
//! result is downgraded to `None`.

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("no video/mp4 source tag found")]
    NoMatch,
}
