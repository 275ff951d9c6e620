//! Per-player card storage: draw pile, discard pile and hand.
//!
//! Drawing from an exhausted draw pile reshuffles the discard pile into a
//! new draw pile first. Drawing when both piles are empty yields nothing;
//! that is a normal end-game situation, never an error.

use std::collections::VecDeque;

use log::trace;

use crate::cards::CardKind;
use crate::core::{GameRng, PlayerId};
use crate::error::{DominionError, Result};

/// Cards drawn at the start of every turn.
pub const HAND_SIZE: usize = 5;

/// Draw pile (front = top) and discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    pub draw_pile: VecDeque<CardKind>,
    pub discard_pile: Vec<CardKind>,
}

impl Deck {
    /// 7 Coppers and 3 Estates, shuffled into the draw pile.
    #[must_use]
    pub fn starting(rng: &mut GameRng) -> Self {
        let mut deck = Self {
            draw_pile: std::iter::repeat(CardKind::Copper)
                .take(7)
                .chain(std::iter::repeat(CardKind::Estate).take(3))
                .collect(),
            discard_pile: Vec::new(),
        };
        deck.shuffle_deck(rng);
        deck
    }

    /// Move the discard pile into the draw pile, then shuffle the draw pile.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        self.draw_pile.extend(self.discard_pile.drain(..));
        rng.shuffle(self.draw_pile.make_contiguous());
    }

    /// Remove the top card, reshuffling the discard pile in if needed.
    ///
    /// Returns `None` when both piles are empty.
    pub fn reveal_top(&mut self, rng: &mut GameRng) -> Option<CardKind> {
        if self.draw_pile.is_empty() && !self.discard_pile.is_empty() {
            trace!("reshuffling {} discarded cards", self.discard_pile.len());
            self.shuffle_deck(rng);
        }
        self.draw_pile.pop_front()
    }

    /// Place a card on top of the draw pile.
    pub fn put_on_top(&mut self, card: CardKind) {
        self.draw_pile.push_front(card);
    }

    pub fn discard(&mut self, card: CardKind) {
        self.discard_pile.push(card);
    }

    /// Cards in the draw and discard piles together.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }

    /// Remove the most recently discarded copy of `card`.
    pub fn remove_from_discard(&mut self, card: CardKind) -> bool {
        match self.discard_pile.iter().rposition(|&c| c == card) {
            Some(pos) => {
                self.discard_pile.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Cards currently held.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<CardKind>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: CardKind) {
        self.cards.push(card);
    }

    /// Remove the first copy of `card`. Returns false when absent.
    pub fn remove(&mut self, card: CardKind) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn contains(&self, card: CardKind) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CardKind> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CardKind] {
        &self.cards
    }

    /// Total coin value of the Treasures held.
    #[must_use]
    pub fn treasure_value(&self) -> u32 {
        self.iter()
            .filter(|c| c.is_treasure())
            .map(|c| c.definition().coins)
            .sum()
    }

    /// Take every card out of the hand.
    pub fn take_all(&mut self) -> Vec<CardKind> {
        std::mem::take(&mut self.cards)
    }
}

impl FromIterator<CardKind> for Hand {
    fn from_iter<I: IntoIterator<Item = CardKind>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Everything one seat owns: name, deck and hand.
#[derive(Clone, Debug)]
pub struct PlayerZones {
    pub id: PlayerId,
    pub name: String,
    pub deck: Deck,
    pub hand: Hand,
}

impl PlayerZones {
    /// Fresh starting deck with a 5-card hand drawn.
    pub fn new(id: PlayerId, name: impl Into<String>, rng: &mut GameRng) -> Self {
        let mut zones = Self {
            id,
            name: name.into(),
            deck: Deck::starting(rng),
            hand: Hand::new(),
        };
        for _ in 0..HAND_SIZE {
            zones.draw_card(rng);
        }
        zones
    }

    /// Draw one card into hand. Returns the card, or `None` if nothing was left.
    pub fn draw_card(&mut self, rng: &mut GameRng) -> Option<CardKind> {
        let card = self.deck.reveal_top(rng)?;
        self.hand.add(card);
        Some(card)
    }

    /// Draw up to `count` cards. Returns how many were drawn.
    pub fn draw_cards(&mut self, count: u32, rng: &mut GameRng) -> u32 {
        (0..count).take_while(|_| self.draw_card(rng).is_some()).count() as u32
    }

    /// Draw a new 5-card hand.
    ///
    /// The hand must be empty; anything else is a sequencing bug in the caller.
    pub fn draw_hand(&mut self, rng: &mut GameRng) -> Result<()> {
        if !self.hand.is_empty() {
            return Err(DominionError::HandNotEmpty { player: self.id });
        }
        for _ in 0..HAND_SIZE {
            self.draw_card(rng);
        }
        Ok(())
    }

    /// Move the whole hand to the discard pile.
    pub fn discard_hand(&mut self) {
        let cards = self.hand.take_all();
        self.deck.discard_pile.extend(cards);
    }

    /// Move one copy of `card` from hand to the discard pile.
    pub fn discard_from_hand(&mut self, card: CardKind) -> Result<()> {
        self.take_from_hand(card)?;
        self.deck.discard(card);
        Ok(())
    }

    /// Remove one copy of `card` from hand, failing if it is not there.
    pub fn take_from_hand(&mut self, card: CardKind) -> Result<()> {
        if self.hand.remove(card) {
            Ok(())
        } else {
            Err(DominionError::CardNotInHand { player: self.id, card })
        }
    }

    /// Cards owned across draw pile, discard pile and hand.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.hand.len()
    }

    /// Every owned card, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = CardKind> + '_ {
        self.deck
            .draw_pile
            .iter()
            .chain(self.deck.discard_pile.iter())
            .copied()
            .chain(self.hand.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones_with(draw: &[CardKind], discard: &[CardKind], hand: &[CardKind]) -> PlayerZones {
        PlayerZones {
            id: PlayerId::new(0),
            name: "test".to_string(),
            deck: Deck {
                draw_pile: draw.iter().copied().collect(),
                discard_pile: discard.to_vec(),
            },
            hand: hand.iter().copied().collect(),
        }
    }

    #[test]
    fn test_starting_deck() {
        let mut rng = GameRng::new(1);
        let zones = PlayerZones::new(PlayerId::new(0), "p0", &mut rng);

        assert_eq!(zones.hand.len(), 5);
        assert_eq!(zones.deck.draw_pile.len(), 5);
        assert!(zones.deck.discard_pile.is_empty());
        assert_eq!(zones.all_cards().filter(|&c| c == CardKind::Copper).count(), 7);
        assert_eq!(zones.all_cards().filter(|&c| c == CardKind::Estate).count(), 3);
    }

    #[test]
    fn test_draw_reshuffles_discard() {
        let mut rng = GameRng::new(1);
        let mut zones = zones_with(&[], &[CardKind::Gold, CardKind::Silver], &[]);

        let drawn = zones.draw_card(&mut rng);

        assert!(drawn.is_some());
        assert!(zones.deck.discard_pile.is_empty());
        assert_eq!(zones.deck.draw_pile.len(), 1);
        assert_eq!(zones.hand.len(), 1);
    }

    #[test]
    fn test_draw_from_nothing_is_noop() {
        let mut rng = GameRng::new(1);
        let mut zones = zones_with(&[], &[], &[CardKind::Copper]);

        assert_eq!(zones.draw_card(&mut rng), None);
        assert_eq!(zones.hand.len(), 1);
        assert_eq!(zones.draw_cards(3, &mut rng), 0);
    }

    #[test]
    fn test_draw_takes_from_top() {
        let mut rng = GameRng::new(1);
        let mut zones = zones_with(&[CardKind::Gold, CardKind::Estate], &[CardKind::Copper], &[]);

        assert_eq!(zones.draw_card(&mut rng), Some(CardKind::Gold));
        assert_eq!(zones.deck.discard_pile, vec![CardKind::Copper]);
    }

    #[test]
    fn test_draw_hand_requires_empty_hand() {
        let mut rng = GameRng::new(1);
        let mut zones = zones_with(&[CardKind::Copper; 6], &[], &[CardKind::Estate]);

        assert_eq!(
            zones.draw_hand(&mut rng),
            Err(DominionError::HandNotEmpty { player: PlayerId::new(0) })
        );

        zones.discard_hand();
        assert!(zones.draw_hand(&mut rng).is_ok());
        assert_eq!(zones.hand.len(), 5);
        assert_eq!(zones.deck.discard_pile, vec![CardKind::Estate]);
    }

    #[test]
    fn test_short_deck_draws_what_exists() {
        let mut rng = GameRng::new(1);
        let mut zones = zones_with(&[CardKind::Copper, CardKind::Copper], &[CardKind::Estate], &[]);

        zones.draw_hand(&mut rng).unwrap();
        assert_eq!(zones.hand.len(), 3);
        assert!(zones.deck.is_empty());
    }

    #[test]
    fn test_shuffle_deck_merges_piles() {
        let mut rng = GameRng::new(3);
        let mut deck = Deck {
            draw_pile: [CardKind::Gold].into_iter().collect(),
            discard_pile: vec![CardKind::Copper, CardKind::Estate],
        };
        deck.shuffle_deck(&mut rng);
        assert_eq!(deck.draw_pile.len(), 3);
        assert!(deck.discard_pile.is_empty());
    }

    #[test]
    fn test_discard_from_hand() {
        let mut zones = zones_with(&[], &[], &[CardKind::Copper, CardKind::Estate]);

        zones.discard_from_hand(CardKind::Estate).unwrap();
        assert_eq!(zones.hand.as_slice(), &[CardKind::Copper]);
        assert_eq!(zones.deck.discard_pile, vec![CardKind::Estate]);

        assert_eq!(
            zones.discard_from_hand(CardKind::Gold),
            Err(DominionError::CardNotInHand {
                player: PlayerId::new(0),
                card: CardKind::Gold
            })
        );
    }

    #[test]
    fn test_treasure_value() {
        let hand: Hand = [CardKind::Copper, CardKind::Gold, CardKind::Estate, CardKind::Silver]
            .into_iter()
            .collect();
        assert_eq!(hand.treasure_value(), 6);
    }

    #[test]
    fn test_remove_from_discard_takes_latest() {
        let mut deck = Deck {
            draw_pile: VecDeque::new(),
            discard_pile: vec![CardKind::Feast, CardKind::Copper, CardKind::Feast],
        };
        assert!(deck.remove_from_discard(CardKind::Feast));
        assert_eq!(deck.discard_pile, vec![CardKind::Feast, CardKind::Copper]);
        assert!(!deck.remove_from_discard(CardKind::Gold));
    }
}
