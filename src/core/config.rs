//! Game configuration.
//!
//! `GameConfig` is everything needed to set up a match apart from the
//! agents: seat count, which kingdom to use, the RNG seed, and an optional
//! safety bound on the number of turns.

use serde::{Deserialize, Serialize};

use crate::error::{DominionError, Result};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Which 10 kingdom cards go into the supply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSet {
    /// The fixed introductory kingdom.
    Base,
    /// 10 kingdom cards sampled uniformly without replacement.
    #[default]
    Random,
}

impl std::fmt::Display for CardSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSet::Base => f.write_str("base"),
            CardSet::Random => f.write_str("random"),
        }
    }
}

impl std::str::FromStr for CardSet {
    type Err = DominionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "base" => Ok(CardSet::Base),
            "random" => Ok(CardSet::Random),
            other => Err(DominionError::UnsupportedCardSet(other.to_string())),
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use dominion_engine::core::{CardSet, GameConfig};
///
/// let config = GameConfig::new(3)
///     .with_card_set(CardSet::Base)
///     .with_seed(7)
///     .with_turn_limit(200);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.turn_limit, Some(200));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-4).
    pub player_count: usize,

    /// Kingdom selection.
    #[serde(default)]
    pub card_set: CardSet,

    /// Seed for every shuffle and random choice.
    #[serde(default)]
    pub seed: u64,

    /// Stop after this many turns in total. `None` plays to the natural end.
    #[serde(default)]
    pub turn_limit: Option<u32>,
}

impl GameConfig {
    /// Create a configuration with a random kingdom and seed 0.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            card_set: CardSet::default(),
            seed: 0,
            turn_limit: None,
        }
    }

    #[must_use]
    pub fn with_card_set(mut self, card_set: CardSet) -> Self {
        self.card_set = card_set;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = Some(turns);
        self
    }

    /// Check the seat count.
    pub fn validate(&self) -> Result<()> {
        if (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            Ok(())
        } else {
            Err(DominionError::InvalidPlayerCount(self.player_count))
        }
    }
}
