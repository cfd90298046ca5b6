//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex CLI.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero TTL
    #[error("cache TTL must be greater than zero")]
    InvalidTtl,

    /// HTTP request failed or returned an error status
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading from stdin or writing the prompt failed
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// Command name not in the command table
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Command invoked without its required argument
    #[error("please provide a {0}")]
    MissingArgument(&'static str),

    /// `inspect` on a Pokemon that has not been caught
    #[error("you haven't caught {0} yet")]
    NotCaught(String),

    /// `mapb` with no previous page to go back to
    #[error("you're on the first page")]
    FirstPage,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
