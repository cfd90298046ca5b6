//! PokeAPI Client Module
//!
//! HTTP access to PokeAPI with transparent response caching.

mod client;

pub use client::Client;
