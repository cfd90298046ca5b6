//! Pokedex - an interactive PokeAPI REPL
//!
//! Fetches Pokemon data over HTTP and keeps raw responses in a
//! time-expiring in-memory cache so repeated lookups within the TTL
//! window skip the network round-trip.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod repl;
pub mod tasks;

pub use config::Config;
pub use error::{PokedexError, Result};
pub use tasks::spawn_reaper;
