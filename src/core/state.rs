//! Game state: everything the engine mutates during play.
//!
//! ## TurnState
//!
//! Counters for the active player's turn (actions, buys, coins). Reset at
//! the start of every turn.
//!
//! ## GameState
//!
//! Complete state of a match:
//! - Per-seat zones (deck, discard, hand)
//! - The supply and the shared trash
//! - Turn progression
//! - Event history
//! - RNG
//!
//! Agents live outside `GameState`, so an ability can hold a mutable
//! borrow of the state while it asks an agent for a decision.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{EventRecord, GameEvent};
use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::CardKind;
use crate::error::Result;
use crate::zones::{PlayerZones, Supply};

/// Per-turn counters for the active player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub actions: u32,
    pub buys: u32,
    pub coins: u32,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            actions: 1,
            buys: 1,
            coins: 0,
        }
    }
}

/// Full game state.
#[derive(Clone, Debug)]
pub struct GameState {
    // === Cards ===
    /// Deck, discard pile and hand per seat.
    pub players: PlayerMap<PlayerZones>,

    /// Remaining piles.
    pub supply: Supply,

    /// Cards removed from the game.
    pub trash: Vec<CardKind>,

    // === Progression ===
    /// Counters for the active player.
    pub turn: TurnState,

    /// Turn number (starts at 1, counts every player's turn).
    pub turn_number: u32,

    /// Whose turn it is.
    pub active_player: PlayerId,

    // === History ===
    /// Append-only event log. Persistent vector, so snapshots are O(1).
    pub history: Vector<EventRecord>,

    /// Deterministic RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Set up a fresh game: supply, starting decks and opening hands.
    ///
    /// `names` holds one name per seat. Fails on an unsupported player count.
    pub fn new(config: &GameConfig, names: &[String]) -> Result<Self> {
        config.validate()?;
        assert_eq!(names.len(), config.player_count, "One name per seat");

        let mut rng = GameRng::new(config.seed);
        let supply = Supply::new(config.player_count, config.card_set, &mut rng);
        let players = PlayerMap::new(config.player_count, |id| {
            PlayerZones::new(id, names[id.index()].clone(), &mut rng)
        });

        Ok(Self {
            players,
            supply,
            trash: Vec::new(),
            turn: TurnState::default(),
            turn_number: 1,
            active_player: PlayerId::new(0),
            history: Vector::new(),
            rng,
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn zones(&self, player: PlayerId) -> &PlayerZones {
        &self.players[player]
    }

    pub fn zones_mut(&mut self, player: PlayerId) -> &mut PlayerZones {
        &mut self.players[player]
    }

    // === Drawing ===

    /// Draw one card into `player`'s hand.
    pub fn draw_card(&mut self, player: PlayerId) -> Option<CardKind> {
        self.players[player].draw_card(&mut self.rng)
    }

    /// Draw up to `count` cards. Returns how many were drawn.
    pub fn draw_cards(&mut self, player: PlayerId, count: u32) -> u32 {
        self.players[player].draw_cards(count, &mut self.rng)
    }

    /// Take the top card of `player`'s deck without putting it in hand.
    pub fn reveal_top(&mut self, player: PlayerId) -> Option<CardKind> {
        self.players[player].deck.reveal_top(&mut self.rng)
    }

    // === History ===

    /// Append an event for `player` at the current turn.
    pub fn record(&mut self, player: PlayerId, event: GameEvent) {
        self.history.push_back(EventRecord {
            player,
            event,
            turn: self.turn_number,
        });
    }

    /// Events that affected one player, oldest first.
    pub fn events_for(&self, player: PlayerId) -> impl Iterator<Item = &GameEvent> {
        self.history
            .iter()
            .filter(move |r| r.player == player)
            .map(|r| &r.event)
    }

    // === Accounting ===

    /// Cards across every player, the supply and the trash.
    ///
    /// Constant for the whole game: cards only ever move between places.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        let owned: usize = self.players.iter().map(|(_, z)| z.card_count()).sum();
        owned + self.supply.total_cards() as usize + self.trash.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardSet;
    use crate::error::DominionError;

    fn names(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Player {i}")).collect()
    }

    #[test]
    fn test_turn_state_default() {
        let turn = TurnState::default();
        assert_eq!((turn.actions, turn.buys, turn.coins), (1, 1, 0));
    }

    #[test]
    fn test_new_game_state() {
        let config = GameConfig::new(3).with_card_set(CardSet::Base).with_seed(9);
        let state = GameState::new(&config, &names(3)).unwrap();

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.turn_number, 1);
        assert_eq!(state.active_player, PlayerId::new(0));
        assert!(state.trash.is_empty());
        for (_, zones) in state.players.iter() {
            assert_eq!(zones.hand.len(), 5);
            assert_eq!(zones.card_count(), 10);
        }
        assert_eq!(state.zones(PlayerId::new(2)).name, "Player 3");
    }

    #[test]
    fn test_same_seed_same_setup() {
        let config = GameConfig::new(2).with_seed(21);
        let a = GameState::new(&config, &names(2)).unwrap();
        let b = GameState::new(&config, &names(2)).unwrap();

        assert_eq!(a.supply.kingdom(), b.supply.kingdom());
        assert_eq!(
            a.zones(PlayerId::new(0)).hand,
            b.zones(PlayerId::new(0)).hand
        );
    }

    #[test]
    fn test_record_and_filter() {
        let config = GameConfig::new(2).with_card_set(CardSet::Base);
        let mut state = GameState::new(&config, &names(2)).unwrap();

        state.record(PlayerId::new(0), GameEvent::Played(CardKind::Smithy));
        state.turn_number = 2;
        state.record(PlayerId::new(1), GameEvent::Bought(CardKind::Silver));

        let p1: Vec<_> = state.events_for(PlayerId::new(1)).collect();
        assert_eq!(p1, vec![&GameEvent::Bought(CardKind::Silver)]);
        assert_eq!(state.history[1].turn, 2);
    }

    #[test]
    fn test_rejects_bad_player_count() {
        for players in [1, 5] {
            let config = GameConfig::new(players);
            let err = GameState::new(&config, &names(players)).unwrap_err();
            assert_eq!(err, DominionError::InvalidPlayerCount(players));
        }
    }

    #[test]
    fn test_total_cards_two_players() {
        let config = GameConfig::new(2).with_card_set(CardSet::Base);
        let state = GameState::new(&config, &names(2)).unwrap();

        // 46 + 40 + 30 + 3 * 8 + 10 base, 100 kingdom, 20 starting cards
        assert_eq!(state.total_cards(), 150 + 100 + 20);
    }
}
