//! Error types for the rules engine.
//!
//! Every variant is a fatal condition: a programming error in the caller
//! or a Decision Port answering outside the menu it was given. Normal game
//! situations (drawing from an exhausted deck, an empty gain menu, a
//! blocked attack) are never reported as errors.

use thiserror::Error;

use crate::cards::CardKind;
use crate::core::PlayerId;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, DominionError>;

/// Fatal engine errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DominionError {
    /// A card name that is not in the catalog.
    #[error("unknown card: {0}")]
    UnknownCard(String),

    /// `draw_hand` was called while cards were still in hand.
    #[error("{player} must have an empty hand before drawing a new one")]
    HandNotEmpty {
        /// Seat whose hand was not empty.
        player: PlayerId,
    },

    /// An agent answered with a label that was not on the menu.
    #[error("{decision}: choice `{choice}` was not offered")]
    InvalidChoice {
        /// Decision point name (e.g. `select_buy`).
        decision: &'static str,
        /// Label the agent returned.
        choice: String,
    },

    /// An agent answered with a count that was not offered.
    #[error("{decision}: count {count} was not offered")]
    InvalidCount {
        /// Decision point name.
        decision: &'static str,
        /// Count the agent returned.
        count: usize,
    },

    /// `remove_top` on a pile with no cards left.
    #[error("supply pile {0} is empty")]
    PileEmpty(CardKind),

    /// A kind that has no pile in this game's supply.
    #[error("{0} is not in the supply")]
    NotInSupply(CardKind),

    /// A card expected in hand was not there.
    #[error("{player} has no {card} in hand")]
    CardNotInHand {
        /// Seat that was searched.
        player: PlayerId,
        /// Missing kind.
        card: CardKind,
    },

    /// Player count outside 2-4.
    #[error("player count must be between 2 and 4, got {0}")]
    InvalidPlayerCount(usize),

    /// More agents configured than seats.
    #[error("{agents} agents configured for {players} players")]
    TooManyAgents {
        /// Number of agents supplied.
        agents: usize,
        /// Number of seats.
        players: usize,
    },

    /// Card set selector other than `base` or `random`.
    #[error("unsupported card set: {0}")]
    UnsupportedCardSet(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DominionError::PileEmpty(CardKind::Province);
        assert_eq!(err.to_string(), "supply pile Province is empty");

        let err = DominionError::InvalidChoice {
            decision: "select_buy",
            choice: "Gold".to_string(),
        };
        assert_eq!(err.to_string(), "select_buy: choice `Gold` was not offered");

        let err = DominionError::HandNotEmpty { player: PlayerId::new(1) };
        assert_eq!(
            err.to_string(),
            "Player 1 must have an empty hand before drawing a new one"
        );
    }
}
