//! The shared supply: one pile per card kind in the game.
//!
//! The set of piles is fixed when the supply is built. Piles only ever
//! shrink. Copies of a kind are interchangeable, so a pile is just a kind
//! and a count.

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardKind, BASE_KINGDOM, KINGDOM_CARDS};
use crate::core::{CardSet, GameRng};
use crate::error::{DominionError, Result};

/// Kingdom cards in one supply.
pub const KINGDOM_SIZE: usize = 10;

/// A stack of identical cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyPile {
    pub kind: CardKind,
    pub count: u32,
}

/// Card kind → remaining stack, in setup order (base cards first).
#[derive(Clone, Debug, Default)]
pub struct Supply {
    piles: Vec<SupplyPile>,
    index: FxHashMap<CardKind, usize>,
    kingdom: Vec<CardKind>,
}

impl Supply {
    /// Build the supply for a game.
    ///
    /// Base piles are sized by player count; the kingdom is either the
    /// fixed `base` list or a uniform sample of 10 kingdom cards.
    ///
    /// `player_count` must already be validated (2-4).
    pub fn new(player_count: usize, card_set: CardSet, rng: &mut GameRng) -> Self {
        let n = player_count as u32;
        let victory = if player_count == 2 { 8 } else { 12 };

        let kingdom = match card_set {
            CardSet::Base => BASE_KINGDOM.to_vec(),
            CardSet::Random => rng.sample(&KINGDOM_CARDS, KINGDOM_SIZE),
        };

        let base = [
            (CardKind::Copper, 60 - 7 * n),
            (CardKind::Silver, 40),
            (CardKind::Gold, 30),
            (CardKind::Estate, victory),
            (CardKind::Duchy, victory),
            (CardKind::Province, victory),
            (CardKind::Curse, 10 + 10 * (n - 2)),
        ];
        let kingdom_piles = kingdom
            .iter()
            .map(|&kind| (kind, if kind.is_victory() { 12 } else { 10 }));

        let mut supply = Self::from_piles(base.into_iter().chain(kingdom_piles));
        supply.kingdom = kingdom;

        debug!(
            "supply ready: {}",
            supply
                .kingdom
                .iter()
                .map(|k| k.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        supply
    }

    /// Build a supply from explicit piles.
    ///
    /// Later duplicates of a kind are ignored.
    pub fn from_piles(piles: impl IntoIterator<Item = (CardKind, u32)>) -> Self {
        let mut supply = Self::default();
        for (kind, count) in piles {
            if supply.index.contains_key(&kind) {
                continue;
            }
            supply.index.insert(kind, supply.piles.len());
            supply.piles.push(SupplyPile { kind, count });
        }
        supply.kingdom = supply
            .piles
            .iter()
            .map(|p| p.kind)
            .filter(|k| KINGDOM_CARDS.contains(k))
            .collect();
        supply
    }

    fn pile(&self, kind: CardKind) -> Option<&SupplyPile> {
        self.index.get(&kind).map(|&i| &self.piles[i])
    }

    /// Whether this game has a pile of `kind` at all.
    #[must_use]
    pub fn contains(&self, kind: CardKind) -> bool {
        self.index.contains_key(&kind)
    }

    /// Cards left in the pile (0 for kinds not in this game).
    #[must_use]
    pub fn count(&self, kind: CardKind) -> u32 {
        self.pile(kind).map_or(0, |p| p.count)
    }

    /// True when the pile has run out or was never part of this game.
    #[must_use]
    pub fn is_empty(&self, kind: CardKind) -> bool {
        self.count(kind) == 0
    }

    /// Take one card from a pile.
    ///
    /// Callers check emptiness first; taking from an empty pile is an error.
    pub fn remove_top(&mut self, kind: CardKind) -> Result<CardKind> {
        let i = *self.index.get(&kind).ok_or(DominionError::NotInSupply(kind))?;
        let pile = &mut self.piles[i];
        if pile.count == 0 {
            return Err(DominionError::PileEmpty(kind));
        }
        pile.count -= 1;
        Ok(kind)
    }

    /// Non-empty piles costing at most `max_cost`, in supply order.
    #[must_use]
    pub fn cheapest_available(&self, max_cost: u32) -> Vec<CardKind> {
        self.piles
            .iter()
            .filter(|p| p.count > 0 && p.kind.cost() <= max_cost)
            .map(|p| p.kind)
            .collect()
    }

    /// Number of piles with no cards left.
    #[must_use]
    pub fn empty_pile_count(&self) -> usize {
        self.piles.iter().filter(|p| p.count == 0).count()
    }

    /// Every pile in supply order.
    pub fn iter(&self) -> impl Iterator<Item = &SupplyPile> {
        self.piles.iter()
    }

    /// Every kind with a pile, in supply order.
    pub fn kinds(&self) -> impl Iterator<Item = CardKind> + '_ {
        self.piles.iter().map(|p| p.kind)
    }

    /// The kingdom kinds in this game.
    #[must_use]
    pub fn kingdom(&self) -> &[CardKind] {
        &self.kingdom
    }

    /// Cards left across all piles.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.piles.iter().map(|p| p.count).sum()
    }
}
