//! Background Tasks Module
//!
//! Background work that runs for the life of the process.
//!
//! # Tasks
//! - Cache reaper: removes expired cache entries once per TTL interval

mod reaper;

pub use reaper::spawn_reaper;
