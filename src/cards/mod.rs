//! Card system: kinds, definitions, and the static catalog.
//!
//! ## Key Types
//!
//! - `CardKind`: Enumerates every card in the game
//! - `CardDefinition`: Cost, type, static bonuses and special ability
//! - `Ability`: The special procedure a card runs after its bonuses
//!
//! Cards carry no per-instance state. Piles, decks and hands are all
//! sequences of `CardKind`.

pub mod definition;
pub mod registry;

pub use definition::{Ability, CardDefinition, CardKind, Category, Subcategory};
pub use registry::{catalog, lookup, BASE_CARDS, BASE_KINGDOM, KINGDOM_CARDS};
