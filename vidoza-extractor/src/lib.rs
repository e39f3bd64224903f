//! Vidoza stream extractor.
//!
//! Fetches a Vidoza embed page and pulls the direct video stream URL out of
//! its `<source src="..." type='video/mp4'>` tag.
//!
//! ```no_run
//! # async fn run() {
//! if let Some(stream) = vidoza::extract_stream_url("https://vidoza.net/embed-abc.html").await {
//!     println!("{stream}");
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod html;
pub mod util;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use error::ExtractError;
pub use extractor::{extract_stream_url, StreamExtractor};
pub use html::find_stream_source;
