//! Command callbacks
//!
//! One function per REPL command, operating on [`ReplState`]. Output
//! goes to stdout; diagnostics go through `tracing`.

use rand::Rng;
use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;
use crate::repl::{ReplState, COMMANDS};

/// Roll above which a Pokemon escapes the ball.
const CATCH_THRESHOLD: u32 = 50;

// == help ==
pub(super) fn help() {
    println!();
    println!("Welcome to the Pokedex!");
    println!("Usage:");
    println!();
    for (name, description) in COMMANDS {
        println!("{name}: {description}");
    }
    println!();
}

// == map ==
/// Prints the next page of location areas and remembers the page links.
pub(super) async fn map(state: &mut ReplState) -> Result<()> {
    let page = state
        .client
        .list_location_areas(state.next_url.as_deref())
        .await?;
    show_page(state, page);
    Ok(())
}

// == mapb ==
/// Prints the previous page of location areas.
pub(super) async fn map_back(state: &mut ReplState) -> Result<()> {
    let Some(prev) = state.prev_url.clone() else {
        return Err(PokedexError::FirstPage);
    };

    let page = state.client.list_location_areas(Some(&prev)).await?;
    show_page(state, page);
    Ok(())
}

fn show_page(state: &mut ReplState, page: LocationAreaPage) {
    let LocationAreaPage {
        next,
        previous,
        results,
        ..
    } = page;
    state.next_url = next;
    state.prev_url = previous;

    for area in results {
        println!("{}", area.name);
    }
}

// == explore ==
/// Lists the Pokemon encountered in a location area.
pub(super) async fn explore(state: &mut ReplState, args: &[String]) -> Result<()> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("location area name"))?;

    let area = state.client.get_location_area(name).await?;

    println!("Exploring {name}...");
    println!("Found Pokemon:");
    for encounter in &area.pokemon_encounters {
        println!(" - {}", encounter.pokemon.name);
    }
    Ok(())
}

// == catch ==
/// Rolls against the Pokemon's base experience; stronger Pokemon are
/// harder to catch. Caught Pokemon land in the session pokedex.
pub(super) async fn catch(state: &mut ReplState, args: &[String]) -> Result<()> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("pokemon name"))?;

    let pokemon = state.client.get_pokemon(name).await?;
    println!("Throwing a Pokeball at {}...", pokemon.name);

    // max(1) guards the handful of species with no base experience.
    let roll = rand::thread_rng().gen_range(0..pokemon.base_experience.max(1));
    debug!("catch roll {} against threshold {}", roll, CATCH_THRESHOLD);

    if roll > CATCH_THRESHOLD {
        println!("{} escaped!", pokemon.name);
        return Ok(());
    }

    println!("{} was caught", pokemon.name);
    state.caught.insert(name.clone(), pokemon);
    Ok(())
}

// == inspect ==
/// Prints the details of a Pokemon caught earlier this session.
pub(super) fn inspect(state: &ReplState, args: &[String]) -> Result<()> {
    let name = args
        .first()
        .ok_or(PokedexError::MissingArgument("pokemon name"))?;

    let pokemon = state
        .caught
        .get(name)
        .ok_or_else(|| PokedexError::NotCaught(name.clone()))?;

    println!("Name: {}", pokemon.name);
    println!("Height: {}", pokemon.height);
    println!("Weight: {}", pokemon.weight);
    println!("Stats:");
    for stat in &pokemon.stats {
        println!("  -{} : {}", stat.stat.name, stat.base_stat);
    }
    println!("Types:");
    for slot in &pokemon.types {
        println!("  - {}", slot.type_.name);
    }
    Ok(())
}

// == pokedex ==
/// Lists every Pokemon caught this session.
pub(super) fn pokedex(state: &ReplState) {
    println!("Your Pokemon:");
    for pokemon in state.caught.values() {
        println!("  - {}", pokemon.name);
    }
}
