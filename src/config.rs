//! Configuration Module
//!
//! Handles loading runtime configuration from environment variables.

use std::env;

/// Default base URL of the public PokeAPI.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Runtime configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds; also the reap interval
    pub cache_ttl_secs: u64,
    /// HTTP request timeout in seconds
    pub http_timeout_secs: u64,
    /// PokeAPI base URL, overridable so tests can point at a local server
    pub base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - response cache TTL in seconds (default: 5)
    /// - `HTTP_TIMEOUT_SECS` - HTTP request timeout in seconds (default: 5)
    /// - `POKEAPI_BASE_URL` - API base URL (default: the public PokeAPI)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            base_url: env::var("POKEAPI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: 5,
            http_timeout_secs: 5,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
