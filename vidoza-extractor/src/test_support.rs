//! Local HTTP fixtures for fetch and extraction tests.

use std::time::Duration;

use axum::{
    http::{header::USER_AGENT, HeaderMap, StatusCode},
    response::Html,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

pub(crate) const EMBED_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Vidoza</title></head>
<body>
<video id="player" class="video-js" controls preload="auto">
<source src="https://str38.vidoza.net/vod/v.mp4" type='video/mp4'>
</video>
</body>
</html>"#;

pub(crate) const EMBED_STREAM_URL: &str = "https://str38.vidoza.net/vod/v.mp4";

const REMOVED_PAGE: &str = "<html><body><h1>File was deleted</h1></body></html>";

const GONE_PAGE: &str =
    r#"<html><body><source src="https://cdn.vidoza.net/gone.mp4" type='video/mp4'></body></html>"#;

/// Serve the fixture routes on an ephemeral port and return the base URL.
///
/// - `/embed`: a playable embed page
/// - `/removed`: a page without any source tag
/// - `/gone`: 404 status with a source tag in the body
/// - `/echo-ua`: a source tag whose src is the request's User-Agent
/// - `/slow`: answers after five seconds
pub(crate) async fn spawn_fixture_server() -> String {
    let app = Router::new()
        .route("/embed", get(|| async { Html(EMBED_PAGE) }))
        .route("/removed", get(|| async { Html(REMOVED_PAGE) }))
        .route("/gone", get(|| async { (StatusCode::NOT_FOUND, Html(GONE_PAGE)) }))
        .route(
            "/echo-ua",
            get(|headers: HeaderMap| async move {
                let ua = headers
                    .get(USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("none")
                    .to_string();
                Html(format!(r#"<source src="{ua}" type='video/mp4'>"#))
            }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Html(EMBED_PAGE)
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
