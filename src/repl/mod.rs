//! REPL Module
//!
//! The interactive prompt loop and command dispatch.

mod commands;

use std::collections::HashMap;
use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::pokeapi::Client;

// == Repl State ==
/// Mutable session state threaded through every command.
pub struct ReplState {
    /// PokeAPI client; holds the response cache
    pub client: Client,
    /// Pokemon caught this session, keyed by the name the user typed
    pub caught: HashMap<String, Pokemon>,
    /// URL of the next location-area page, if any
    pub next_url: Option<String>,
    /// URL of the previous location-area page, if any
    pub prev_url: Option<String>,
}

impl ReplState {
    /// Creates fresh session state around a client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            caught: HashMap::new(),
            next_url: None,
            prev_url: None,
        }
    }
}

// == Repl Flow ==
/// Whether the loop keeps running after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplFlow {
    Continue,
    Exit,
}

// == Command Table ==
/// Name and usage line for every command, in help display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Get the next page of locations"),
    ("mapb", "Get the previous page of locations"),
    ("explore <location_name>", "Explore a location"),
    ("catch <pokemon_name>", "Attempt to catch a pokemon"),
    ("inspect <pokemon_name>", "View details about a caught pokemon"),
    ("pokedex", "See all the pokemon you've caught"),
];

// == Input Cleaning ==
/// Splits a line of input into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

// == Dispatch ==
/// Runs one tokenized command line against the session state.
pub async fn dispatch(state: &mut ReplState, words: &[String]) -> Result<ReplFlow> {
    let Some((command, args)) = words.split_first() else {
        return Ok(ReplFlow::Continue);
    };

    match command.as_str() {
        "help" => commands::help(),
        "exit" => {
            println!("Closing the Pokedex... Goodbye!");
            return Ok(ReplFlow::Exit);
        }
        "map" => commands::map(state).await?,
        "mapb" => commands::map_back(state).await?,
        "explore" => commands::explore(state, args).await?,
        "catch" => commands::catch(state, args).await?,
        "inspect" => commands::inspect(state, args)?,
        "pokedex" => commands::pokedex(state),
        other => return Err(PokedexError::UnknownCommand(other.to_string())),
    }

    Ok(ReplFlow::Continue)
}

// == Run ==
/// Runs the prompt loop until `exit` or end of input.
///
/// Command errors are printed and the loop continues; only I/O errors
/// on the terminal itself end the loop early.
pub async fn run(mut state: ReplState) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF: piped input ran out, or the user hit Ctrl-D.
            println!();
            break;
        };

        let words = clean_input(&line);
        if words.is_empty() {
            continue;
        }
        debug!("dispatching command {:?}", words[0]);

        match dispatch(&mut state, &words).await {
            Ok(ReplFlow::Exit) => break,
            Ok(ReplFlow::Continue) => {}
            Err(err) => println!("Error: {err}"),
        }
    }

    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::cache::ExpiringCache;
    use crate::config::Config;

    fn test_state() -> ReplState {
        let cache = ExpiringCache::without_reaper(Duration::from_secs(60));
        let client = Client::new(&Config::default(), cache).unwrap();
        ReplState::new(client)
    }

    #[test]
    fn test_clean_input() {
        let cases = [
            ("A B C", vec!["A", "B", "C"]),
            ("Hell8no", vec!["Hell8no"]),
            ("Hello World", vec!["Hello", "World"]),
            ("  spaced   out  ", vec!["spaced", "out"]),
            ("", vec![]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_command_table_covers_dispatch() {
        for (entry, _) in COMMANDS {
            let name = entry.split_whitespace().next().unwrap();
            assert!(
                matches!(
                    name,
                    "help" | "exit" | "map" | "mapb" | "explore" | "catch" | "inspect" | "pokedex"
                ),
                "help lists a command dispatch does not know: {name}"
            );
        }
    }

    #[tokio::test]
    async fn test_dispatch_empty_line_continues() {
        let mut state = test_state();
        let flow = dispatch(&mut state, &[]).await.unwrap();
        assert_eq!(flow, ReplFlow::Continue);
    }

    #[tokio::test]
    async fn test_dispatch_exit() {
        let mut state = test_state();
        let words = clean_input("exit");
        let flow = dispatch(&mut state, &words).await.unwrap();
        assert_eq!(flow, ReplFlow::Exit);
    }

    #[tokio::test]
    async fn test_dispatch_unknown_command() {
        let mut state = test_state();
        let words = clean_input("dance");
        let result = dispatch(&mut state, &words).await;
        assert!(matches!(result, Err(PokedexError::UnknownCommand(name)) if name == "dance"));
    }

    #[tokio::test]
    async fn test_explore_requires_argument() {
        let mut state = test_state();
        let words = clean_input("explore");
        let result = dispatch(&mut state, &words).await;
        assert!(matches!(result, Err(PokedexError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_catch_requires_argument() {
        let mut state = test_state();
        let words = clean_input("catch");
        let result = dispatch(&mut state, &words).await;
        assert!(matches!(result, Err(PokedexError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_inspect_uncaught_pokemon() {
        let mut state = test_state();
        let words = clean_input("inspect pidgey");
        let result = dispatch(&mut state, &words).await;
        assert!(matches!(result, Err(PokedexError::NotCaught(name)) if name == "pidgey"));
    }

    #[tokio::test]
    async fn test_mapb_on_first_page() {
        let mut state = test_state();
        let words = clean_input("mapb");
        let result = dispatch(&mut state, &words).await;
        assert!(matches!(result, Err(PokedexError::FirstPage)));
    }

    #[tokio::test]
    async fn test_pokedex_on_empty_session() {
        let mut state = test_state();
        let words = clean_input("pokedex");
        let flow = dispatch(&mut state, &words).await.unwrap();
        assert_eq!(flow, ReplFlow::Continue);
    }

    #[tokio::test]
    async fn test_help_runs() {
        let mut state = test_state();
        let words = clean_input("help");
        let flow = dispatch(&mut state, &words).await.unwrap();
        assert_eq!(flow, ReplFlow::Continue);
    }
}
