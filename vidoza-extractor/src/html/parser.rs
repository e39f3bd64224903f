//! Source tag matching for Vidoza embed pages.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

/// Vidoza embeds the stream as a single `<source>` element with a
/// double-quoted `src` and a single-quoted `type`.
static SOURCE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<source src="([^"]+)" type='video/mp4'>"#).expect("Invalid source tag regex")
});

/// Find the stream URL in the first `video/mp4` source tag of the page.
///
/// Returns the raw `src` attribute value. No entity decoding or URL
/// normalization is applied.
pub fn find_stream_source(html: &str) -> Option<String> {
    match SOURCE_TAG.captures(html).and_then(|caps| caps.get(1)) {
        Some(src) => {
            debug!(
                html_length = html.len(),
                match_offset = src.start(),
                "source_tag_matched"
            );
            Some(src.as_str().to_string())
        }
        None => {
            info!(html_length = html.len(), "no_source_tag_match");
            None
        }
    }
}
