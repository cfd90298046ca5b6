//! Pokedex - an interactive PokeAPI REPL
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging (to stderr, so the
//!    prompt stays clean)
//! 2. Load configuration from environment variables
//! 3. Create the expiring response cache, which starts its reaper
//! 4. Build the PokeAPI client with the cache injected
//! 5. Run the prompt loop until `exit` or end of input

use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cache::ExpiringCache;
use pokedex::config::Config;
use pokedex::pokeapi::Client;
use pokedex::repl::{self, ReplState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter.
    // Defaults to "info" level, can be overridden with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "configuration loaded: cache_ttl={}s, http_timeout={}s, base_url={}",
        config.cache_ttl_secs, config.http_timeout_secs, config.base_url
    );

    let cache = ExpiringCache::new(Duration::from_secs(config.cache_ttl_secs))
        .context("invalid cache configuration")?;
    let client =
        Client::new(&config, cache.clone()).context("failed to build PokeAPI client")?;

    repl::run(ReplState::new(client)).await?;

    let stats = cache.stats();
    info!(
        "session cache stats: hits={}, misses={}, reaped={}",
        stats.hits, stats.misses, stats.reaped
    );

    Ok(())
}
