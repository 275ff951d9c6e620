//! # dominion-engine
//!
//! A rules engine for the Dominion deck-building card game (first edition
//! base set) for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Static card data**: every card kind is a variant of [`CardKind`]
//!    with one immutable [`CardDefinition`]. Copies are interchangeable,
//!    so piles, decks and hands are plain sequences of kinds.
//!
//! 2. **One pipeline**: playing a card draws, adds actions, buys and
//!    coins, then runs its special ability, always in that order.
//!
//! 3. **Synchronous decisions**: every choice is a call on the seat's
//!    [`Agent`] with a menu of labels. Answers off the menu are errors.
//!
//! 4. **Deterministic**: shuffles and kingdom selection flow from the
//!    configured seed.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, decision labels, game state
//! - `cards`: card kinds, definitions and the catalog
//! - `zones`: decks, hands and the supply
//! - `effects`: the resolution pipeline and card abilities
//! - `agents`: the Decision Port and stock agents
//! - `rules`: the turn engine, game end and scoring
//!
//! ## Example
//!
//! ```
//! use dominion_engine::{CardSet, Game, GameConfig};
//!
//! let config = GameConfig::new(2)
//!     .with_card_set(CardSet::Base)
//!     .with_seed(1)
//!     .with_turn_limit(400);
//! let mut game = Game::new(config, Vec::new()).unwrap();
//! let scores = game.play_game().unwrap();
//! assert_eq!(scores.len(), 2);
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod effects;
pub mod agents;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardSet, Choice, Destination, EventRecord, GameConfig, GameEvent, GameRng, GameState, Menu,
    PlayerId, PlayerMap, TurnState,
};

pub use crate::cards::{Ability, CardDefinition, CardKind, Category, Subcategory};

pub use crate::zones::{Deck, Hand, PlayerZones, Supply};

pub use crate::effects::{EffectResolver, GainRequest, ResolverContext};

pub use crate::agents::{Agent, RandomAgent, ScriptedAgent};

pub use crate::rules::{Game, GameResult, ScoreSheet};

pub use crate::error::{DominionError, Result};
