//! Configuration module for environment variable parsing.

use std::env;
use std::time::Duration;
use tracing::warn;

/// Default HTTP request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 8000;

/// Extractor configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// Optional pool of user agents to rotate through
    pub user_agent_pool: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            user_agent_pool: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            request_timeout_ms: parse_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS),
            user_agent_pool: parse_csv("USER_AGENT_POOL"),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn parse_u64(name: &str, default: u64) -> u64 {
    let raw = match env::var(name) {
        Ok(v) => v,
        Err(_) => return default,
    };

    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => value,
        _ => {
            warn!(env_var = name, value = %raw, "Invalid integer value, using default");
            default
        }
    }
}

/// Parse a comma-separated list of strings.
fn parse_csv(name: &str) -> Option<Vec<String>> {
    env::var(name).ok().map(|raw| {
        raw.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}
