//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use dominion_engine::agents::{Agent, ScriptedAgent};
use dominion_engine::cards::CardKind;
use dominion_engine::core::{CardSet, Choice, GameConfig, PlayerId};
use dominion_engine::rules::Game;
use dominion_engine::zones::Hand;

pub fn p(seat: u8) -> PlayerId {
    PlayerId::new(seat)
}

/// Base-kingdom game with one scripted agent per entry, named `P0`, `P1`, ...
pub fn scripted_game(agents: Vec<ScriptedAgent>) -> Game {
    let config = GameConfig::new(agents.len())
        .with_card_set(CardSet::Base)
        .with_seed(7);
    let seats = agents
        .into_iter()
        .enumerate()
        .map(|(i, agent)| (format!("P{i}"), Box::new(agent) as Box<dyn Agent>))
        .collect();
    Game::new(config, seats).expect("valid game")
}

/// Scripted game where only the first seat has answers queued.
pub fn solo_game(players: usize, first: ScriptedAgent) -> Game {
    let mut agents = vec![first];
    agents.resize_with(players, ScriptedAgent::new);
    scripted_game(agents)
}

pub fn set_hand(game: &mut Game, player: PlayerId, cards: &[CardKind]) {
    game.state_mut().zones_mut(player).hand = cards.iter().copied().collect::<Hand>();
}

/// Replace the draw pile; `cards[0]` ends up on top.
pub fn set_draw_pile(game: &mut Game, player: PlayerId, cards: &[CardKind]) {
    game.state_mut().zones_mut(player).deck.draw_pile = cards.iter().copied().collect::<VecDeque<_>>();
}

pub fn set_discard(game: &mut Game, player: PlayerId, cards: &[CardKind]) {
    game.state_mut().zones_mut(player).deck.discard_pile = cards.to_vec();
}

pub fn hand(game: &Game, player: PlayerId) -> Vec<CardKind> {
    game.state().zones(player).hand.as_slice().to_vec()
}

pub fn discard(game: &Game, player: PlayerId) -> Vec<CardKind> {
    game.state().zones(player).deck.discard_pile.clone()
}

pub fn draw_pile(game: &Game, player: PlayerId) -> Vec<CardKind> {
    game.state().zones(player).deck.draw_pile.iter().copied().collect()
}

/// Buys the best of Province, Gold, Silver it can afford; never plays actions.
#[derive(Debug, Default)]
pub struct BigMoneyAgent;

impl Agent for BigMoneyAgent {
    fn select_action(&mut self, menu: &[Choice]) -> Choice {
        menu[0]
    }

    fn select_buy(&mut self, menu: &[Choice]) -> Choice {
        [CardKind::Province, CardKind::Gold, CardKind::Silver]
            .into_iter()
            .map(Choice::Card)
            .find(|choice| menu.contains(choice))
            .unwrap_or(Choice::EndBuyPhase)
    }

    fn select_gain(&mut self, menu: &[Choice]) -> Choice {
        menu[0]
    }

    fn select_discard(&mut self, menu: &[Choice]) -> Choice {
        menu[0]
    }

    fn select_trash(&mut self, menu: &[Choice]) -> Choice {
        menu[0]
    }

    fn select_n_discard(&mut self, counts: &[usize]) -> usize {
        counts[0]
    }

    fn select_n_trash(&mut self, counts: &[usize]) -> usize {
        counts[0]
    }

    fn select_shuffle(&mut self, menu: &[Choice]) -> Choice {
        menu[0]
    }
}
