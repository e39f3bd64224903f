//! Page fetching - the single outbound GET of an extraction.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::ExtractError;

/// Fetch a page and return its full body text.
///
/// The HTTP status is logged but does not fail the fetch: error pages are
/// returned as text like any other body.
pub async fn fetch_page(
    client: &Client,
    url: &str,
    headers: &[(String, String)],
    timeout: Duration,
) -> Result<String, ExtractError> {
    let parsed = Url::parse(url).map_err(|e| {
        tracing::warn!(url = url, error = %e, "page_fetch_invalid_url");
        e
    })?;

    tracing::info!(
        url = url,
        host = parsed.host_str().unwrap_or(""),
        timeout_seconds = timeout.as_secs_f64(),
        "page_fetch_starting"
    );

    let mut request = client.get(parsed).timeout(timeout);

    for (key, value) in headers {
        request = request.header(key.as_str(), value.as_str());
    }

    let response = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            if e.is_timeout() {
                tracing::error!(
                    url = url,
                    timeout_seconds = timeout.as_secs_f64(),
                    error = %e,
                    "page_fetch_timeout"
                );
            } else if e.is_connect() {
                tracing::error!(url = url, error = %e, "page_fetch_connect_error");
            } else {
                tracing::error!(url = url, error = %e, "page_fetch_error");
            }
            return Err(e.into());
        }
    };

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            url = url,
            status_code = status.as_u16(),
            "page_fetch_unexpected_status"
        );
    }

    let body = response.text().await.map_err(|e| {
        tracing::error!(url = url, error = %e, "page_fetch_body_error");
        ExtractError::Body(e)
    })?;

    tracing::info!(
        url = url,
        status_code = status.as_u16(),
        body_length = body.len(),
        "page_fetch_complete"
    );

    Ok(body)
}
