//! PokeAPI response models
//!
//! Deserialization shapes for the endpoints the client calls, trimmed
//! to the fields the commands actually display. Field names match the
//! API's snake_case JSON directly; unknown fields are ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{NamedResource, Pokemon, PokemonStat, PokemonTypeSlot};
