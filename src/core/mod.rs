//! Core engine types: players, RNG, configuration, decision labels, state.
//!
//! Everything else in the crate is built on these.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{CardSet, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use action::{distinct_menu, Choice, Destination, EventRecord, GameEvent, Menu};
pub use state::{GameState, TurnState};
