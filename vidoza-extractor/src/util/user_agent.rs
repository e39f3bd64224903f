//! User agent rotation and request headers.

use rand::prelude::*;

/// Browser user agents used when no pool is configured.
const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1",
];

/// Pick a random user agent from the configured pool or defaults.
pub fn pick_user_agent(pool: Option<&[String]>) -> String {
    let mut rng = thread_rng();

    let picked = match pool {
        Some(agents) => agents.choose(&mut rng).cloned(),
        None => None,
    };

    // An empty pool behaves like no pool at all
    picked.unwrap_or_else(|| {
        DEFAULT_USER_AGENTS
            .choose(&mut rng)
            .copied()
            .unwrap_or(DEFAULT_USER_AGENTS[0])
            .to_string()
    })
}

/// Build headers for fetching an embed page.
pub fn build_headers(user_agent: &str) -> Vec<(String, String)> {
    vec![
        ("User-Agent".to_string(), user_agent.to_string()),
        (
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
        ),
        ("Accept-Language".to_string(), "en-US,en;q=0.9".to_string()),
    ]
}
