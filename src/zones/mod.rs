//! Card locations: per-player decks and hands, and the shared supply.
//!
//! Every location is a sequence of `CardKind`. Moving a card is removing
//! a kind from one location and pushing it onto another.

pub mod deck;
pub mod supply;

pub use deck::{Deck, Hand, PlayerZones, HAND_SIZE};
pub use supply::{Supply, SupplyPile, KINGDOM_SIZE};
