//! The turn engine and game loop.
//!
//! A turn is three phases:
//!
//! 1. **Action**: while actions remain, the player picks an action card
//!    from hand or ends the phase. Treasures in hand are then counted.
//! 2. **Buy**: while buys remain, the player picks an affordable pile or
//!    ends the phase.
//! 3. **Cleanup**: hand to discard, draw a fresh hand of 5.
//!
//! The game ends as soon as the Province pile is empty or three piles are
//! empty, checked after every turn, so a game can end mid-round.

use log::{debug, info};

use crate::agents::{Agent, Decision, RandomAgent};
use crate::cards::CardKind;
use crate::core::{
    distinct_menu, Choice, GameConfig, GameEvent, GameRng, GameState, Menu, PlayerId, PlayerMap,
    TurnState,
};
use crate::effects::{EffectResolver, ResolverContext};
use crate::error::{DominionError, Result};

use super::score::ScoreSheet;

/// Empty piles that end the game.
const EMPTY_PILES_TO_END: usize = 3;

/// Cards owned per point of Gardens bonus.
const GARDENS_DIVISOR: usize = 10;

/// A match: configuration, state and one agent per seat.
pub struct Game {
    config: GameConfig,
    names: Vec<String>,
    state: GameState,
    agents: PlayerMap<Box<dyn Agent>>,
}

impl Game {
    /// Set up a game.
    ///
    /// `agents` fill seats in order. Seats left over get a [`RandomAgent`]
    /// named `Player {seat}`.
    pub fn new(config: GameConfig, agents: Vec<(String, Box<dyn Agent>)>) -> Result<Self> {
        config.validate()?;
        if agents.len() > config.player_count {
            return Err(DominionError::TooManyAgents {
                agents: agents.len(),
                players: config.player_count,
            });
        }

        let mut seat_rng = GameRng::new(config.seed).fork();
        let mut names = Vec::with_capacity(config.player_count);
        let mut seats: Vec<Box<dyn Agent>> = Vec::with_capacity(config.player_count);
        for (name, agent) in agents {
            names.push(name);
            seats.push(agent);
        }
        for seat in names.len()..config.player_count {
            names.push(format!("Player {seat}"));
            seats.push(Box::new(RandomAgent::from_rng(seat_rng.fork())));
        }

        let state = GameState::new(&config, &names)?;
        info!(
            "new game: {} players, {} kingdom, seed {}",
            config.player_count, config.card_set, config.seed
        );

        Ok(Self {
            config,
            names,
            state,
            agents: PlayerMap::from_vec(seats),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access, for setting up positions.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn player_name(&self, player: PlayerId) -> &str {
        &self.names[player.index()]
    }

    /// Turns completed so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.state.turn_number - 1
    }

    fn context(&mut self) -> ResolverContext<'_> {
        ResolverContext::new(&mut self.state, &mut self.agents)
    }

    // === Turn ===

    /// Play one full turn for `player`.
    pub fn take_turn(&mut self, player: PlayerId) -> Result<()> {
        self.state.active_player = player;
        self.state.turn = TurnState::default();
        debug!("turn {}: {}", self.state.turn_number, self.player_name(player));
        self.state.record(player, GameEvent::TurnStarted);

        self.action_phase(player)?;
        self.buy_phase(player)?;
        self.cleanup(player)?;

        self.state.record(player, GameEvent::TurnEnded);
        self.state.turn_number += 1;
        Ok(())
    }

    /// Play action cards until out of actions or the player stops, then
    /// add the value of Treasures in hand.
    pub fn action_phase(&mut self, player: PlayerId) -> Result<()> {
        while self.state.turn.actions > 0 {
            let menu = self.action_menu(player);
            let mut ctx = self.context();
            match ctx.choose(player, Decision::Action, &menu)? {
                Choice::Card(card) => EffectResolver::play(&mut ctx, player, card)?,
                _ => break,
            }
        }

        self.state.turn.coins += self.state.zones(player).hand.treasure_value();
        Ok(())
    }

    /// `EndActionPhase` plus each distinct action kind in hand.
    #[must_use]
    pub fn action_menu(&self, player: PlayerId) -> Menu {
        distinct_menu(
            Some(Choice::EndActionPhase),
            self.state.zones(player).hand.iter().filter(|k| k.is_action()),
        )
    }

    /// Buy cards until out of buys or the player stops.
    pub fn buy_phase(&mut self, player: PlayerId) -> Result<()> {
        while self.state.turn.buys > 0 {
            let menu = self.buy_menu();
            let choice = self.context().choose(player, Decision::Buy, &menu)?;
            match choice {
                Choice::Card(card) => self.buy_card(player, card)?,
                _ => break,
            }
        }
        Ok(())
    }

    /// `EndBuyPhase` plus every non-empty pile the active player can afford.
    #[must_use]
    pub fn buy_menu(&self) -> Menu {
        let mut menu = Menu::new();
        menu.push(Choice::EndBuyPhase);
        menu.extend(
            self.state
                .supply
                .cheapest_available(self.state.turn.coins)
                .into_iter()
                .map(Choice::Card),
        );
        menu
    }

    fn buy_card(&mut self, player: PlayerId, card: CardKind) -> Result<()> {
        self.state.supply.remove_top(card)?;
        let turn = &mut self.state.turn;
        turn.coins = turn.coins.saturating_sub(card.cost());
        turn.buys = turn.buys.saturating_sub(1);
        self.state.zones_mut(player).deck.discard(card);

        debug!("{} buys {card}", self.player_name(player));
        self.state.record(player, GameEvent::Bought(card));
        Ok(())
    }

    fn cleanup(&mut self, player: PlayerId) -> Result<()> {
        let state = &mut self.state;
        let zones = &mut state.players[player];
        zones.discard_hand();
        zones.draw_hand(&mut state.rng)
    }

    // === Game end ===

    /// Province pile empty, or at least three piles empty.
    #[must_use]
    pub fn check_game_over(&self) -> bool {
        let supply = &self.state.supply;
        supply.is_empty(CardKind::Province) || supply.empty_pile_count() >= EMPTY_PILES_TO_END
    }

    fn turn_limit_reached(&self) -> bool {
        self.config
            .turn_limit
            .map_or(false, |limit| self.turns_played() >= limit)
    }

    /// Whether `play_game` would stop here.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.check_game_over() || self.turn_limit_reached()
    }

    /// Victory points across every card `player` owns.
    ///
    /// Each Gardens adds one point per 10 cards owned, rounded down.
    #[must_use]
    pub fn count_victory_points(&self, player: PlayerId) -> i32 {
        let zones = self.state.zones(player);
        let owned = zones.card_count();
        zones
            .all_cards()
            .map(|card| {
                let bonus = if card == CardKind::Gardens {
                    (owned / GARDENS_DIVISOR) as i32
                } else {
                    0
                };
                card.definition().victory_points + bonus
            })
            .sum()
    }

    /// Current score of every seat.
    #[must_use]
    pub fn scores(&self) -> ScoreSheet {
        let mut sheet = ScoreSheet::new();
        for player in PlayerId::all(self.player_count()) {
            sheet.push(player, self.player_name(player), self.count_victory_points(player));
        }
        sheet
    }

    /// Take turns in seat order until the game ends, then score it.
    pub fn play_game(&mut self) -> Result<ScoreSheet> {
        info!("game start: kingdom {:?}", self.state.supply.kingdom());

        let mut player = self.state.active_player;
        while !self.is_over() {
            self.take_turn(player)?;
            player = player.next(self.player_count());
        }
        if !self.check_game_over() {
            info!("turn limit of {} reached", self.turns_played());
        }

        let scores = self.scores();
        info!("game over after {} turns: {scores}", self.turns_played());
        Ok(scores)
    }

    /// Start a new game with the same seats and agents.
    ///
    /// The new game's seed is drawn from the current game's RNG, so
    /// consecutive games differ while staying reproducible.
    pub fn reset_game(&mut self) -> Result<()> {
        self.config.seed = self.state.rng.fork().seed();
        self.state = GameState::new(&self.config, &self.names)?;
        debug!("game reset with seed {}", self.config.seed);
        Ok(())
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("names", &self.names)
            .field("turn_number", &self.state.turn_number)
            .finish_non_exhaustive()
    }
}
