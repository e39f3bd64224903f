//! Command-line runner: extract the stream URL of one Vidoza embed page.
//!
//! Usage: `vidoza-extract <URL>`. The stream URL is printed to stdout; logs go
//! to stderr as JSON.

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use vidoza::{Config, StreamExtractor};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true).with_writer(std::io::stderr))
        .init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: vidoza-extract <URL>");
        return Ok(ExitCode::from(2));
    };

    let config = Config::from_env();
    tracing::info!(
        request_timeout_ms = config.request_timeout_ms,
        user_agent_pool_size = config.user_agent_pool.as_ref().map_or(0, Vec::len),
        "config_loaded"
    );

    let extractor = StreamExtractor::new(config)?;

    match extractor.extract_stream_url(&url).await {
        Some(stream_url) => {
            println!("{stream_url}");
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
