//! Pokemon response shapes
//!
//! Models for `GET /pokemon/{name}`.

use serde::Deserialize;

/// A `{ name, url }` reference, used throughout the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// A Pokemon, as returned by `GET /pokemon/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Base experience yield; drives the catch difficulty roll.
    /// Missing for a handful of species, defaulting to 0.
    #[serde(default)]
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
}

/// One base stat line (hp, attack, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One of the Pokemon's types.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}
