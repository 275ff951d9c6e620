//! The Decision Port: how the engine asks a player to choose.
//!
//! Every choice during a game is a call on the seat's [`Agent`] with a
//! menu of labels. The call is synchronous and nested inside whatever
//! ability is resolving; the engine waits for the answer and checks it is
//! on the menu before acting on it.
//!
//! ## Agents
//!
//! - [`RandomAgent`]: uniform choice, seeded. Fills unassigned seats.
//! - [`ScriptedAgent`]: replays queued answers, then takes the first
//!   entry of every menu.

mod random;
mod scripted;

pub use random::RandomAgent;
pub use scripted::ScriptedAgent;

use crate::core::Choice;

/// A player's decision maker.
///
/// Menus are never empty. Count menus list every legal count in
/// ascending order, starting at 0.
pub trait Agent {
    /// Pick an action card to play, or `EndActionPhase`.
    fn select_action(&mut self, menu: &[Choice]) -> Choice;

    /// Pick a card to buy, or `EndBuyPhase`.
    fn select_buy(&mut self, menu: &[Choice]) -> Choice;

    /// Pick a card to gain (or `Decline` where offered).
    fn select_gain(&mut self, menu: &[Choice]) -> Choice;

    /// Pick a card to discard, or `KeepCard` where offered.
    fn select_discard(&mut self, menu: &[Choice]) -> Choice;

    /// Pick a card to trash.
    fn select_trash(&mut self, menu: &[Choice]) -> Choice;

    /// How many cards to discard.
    fn select_n_discard(&mut self, counts: &[usize]) -> usize;

    /// How many cards to trash.
    fn select_n_trash(&mut self, counts: &[usize]) -> usize;

    /// `Yes` or `No`: reshuffle the discard pile now?
    fn select_shuffle(&mut self, menu: &[Choice]) -> Choice;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn select_action(&mut self, menu: &[Choice]) -> Choice {
        (**self).select_action(menu)
    }

    fn select_buy(&mut self, menu: &[Choice]) -> Choice {
        (**self).select_buy(menu)
    }

    fn select_gain(&mut self, menu: &[Choice]) -> Choice {
        (**self).select_gain(menu)
    }

    fn select_discard(&mut self, menu: &[Choice]) -> Choice {
        (**self).select_discard(menu)
    }

    fn select_trash(&mut self, menu: &[Choice]) -> Choice {
        (**self).select_trash(menu)
    }

    fn select_n_discard(&mut self, counts: &[usize]) -> usize {
        (**self).select_n_discard(counts)
    }

    fn select_n_trash(&mut self, counts: &[usize]) -> usize {
        (**self).select_n_trash(counts)
    }

    fn select_shuffle(&mut self, menu: &[Choice]) -> Choice {
        (**self).select_shuffle(menu)
    }
}

/// Which label decision is being asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Action,
    Buy,
    Gain,
    Discard,
    Trash,
    Shuffle,
}

impl Decision {
    /// Name of the agent method, used in error reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Decision::Action => "select_action",
            Decision::Buy => "select_buy",
            Decision::Gain => "select_gain",
            Decision::Discard => "select_discard",
            Decision::Trash => "select_trash",
            Decision::Shuffle => "select_shuffle",
        }
    }

    /// Route the menu to the matching agent method.
    pub fn ask(self, agent: &mut dyn Agent, menu: &[Choice]) -> Choice {
        match self {
            Decision::Action => agent.select_action(menu),
            Decision::Buy => agent.select_buy(menu),
            Decision::Gain => agent.select_gain(menu),
            Decision::Discard => agent.select_discard(menu),
            Decision::Trash => agent.select_trash(menu),
            Decision::Shuffle => agent.select_shuffle(menu),
        }
    }
}

/// Which count decision is being asked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountDecision {
    Discard,
    Trash,
}

impl CountDecision {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CountDecision::Discard => "select_n_discard",
            CountDecision::Trash => "select_n_trash",
        }
    }

    pub fn ask(self, agent: &mut dyn Agent, counts: &[usize]) -> usize {
        match self {
            CountDecision::Discard => agent.select_n_discard(counts),
            CountDecision::Trash => agent.select_n_trash(counts),
        }
    }
}
