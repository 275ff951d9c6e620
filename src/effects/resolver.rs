//! Effect resolution: playing a card and running its pipeline.
//!
//! Every resolution runs the same fixed steps in order:
//!
//! 1. draw `plus_cards`
//! 2. add `plus_actions`
//! 3. add `plus_buys`
//! 4. add `coins`
//! 5. run the special ability, if any
//!
//! `play` wraps one resolution with the bookkeeping of playing from hand.
//! Throne Room calls `resolve` directly, twice.

use log::{debug, trace};

use crate::agents::{Agent, CountDecision, Decision};
use crate::cards::CardKind;
use crate::core::{Choice, GameEvent, GameState, PlayerId, PlayerMap};
use crate::error::{DominionError, Result};

use super::abilities;

/// Mutable access to the game and the agents for one resolution.
///
/// State and agents are borrowed separately so an ability can ask an agent
/// while it holds the state.
pub struct ResolverContext<'a> {
    pub state: &'a mut GameState,
    pub agents: &'a mut PlayerMap<Box<dyn Agent>>,
}

impl<'a> ResolverContext<'a> {
    pub fn new(state: &'a mut GameState, agents: &'a mut PlayerMap<Box<dyn Agent>>) -> Self {
        Self { state, agents }
    }

    /// Ask `player` to pick from `menu`, rejecting answers not on it.
    pub fn choose(&mut self, player: PlayerId, decision: Decision, menu: &[Choice]) -> Result<Choice> {
        trace!("{player} {}: [{}]", decision.name(), labels(menu));
        let answer = decision.ask(self.agents[player].as_mut(), menu);
        if menu.contains(&answer) {
            Ok(answer)
        } else {
            Err(DominionError::InvalidChoice {
                decision: decision.name(),
                choice: answer.to_string(),
            })
        }
    }

    /// Ask `player` for a count in `0..=max`.
    pub fn choose_count(&mut self, player: PlayerId, decision: CountDecision, max: usize) -> Result<usize> {
        let counts: Vec<usize> = (0..=max).collect();
        trace!("{player} {}: 0..={max}", decision.name());
        let answer = decision.ask(self.agents[player].as_mut(), &counts);
        if answer <= max {
            Ok(answer)
        } else {
            Err(DominionError::InvalidCount {
                decision: decision.name(),
                count: answer,
            })
        }
    }
}

fn labels(menu: &[Choice]) -> String {
    menu.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-play bookkeeping shared by every resolution of one played card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayFrame {
    /// The card being resolved.
    pub source: CardKind,
    /// Set once the played card has left the player's cards (Feast).
    pub source_trashed: bool,
}

impl PlayFrame {
    #[must_use]
    pub fn new(source: CardKind) -> Self {
        Self {
            source,
            source_trashed: false,
        }
    }
}

/// Runs the bonus-then-ability pipeline.
pub struct EffectResolver;

impl EffectResolver {
    /// Play `card` from `player`'s hand.
    ///
    /// The card goes to the discard pile first, then resolves once, then
    /// one action is spent.
    pub fn play(ctx: &mut ResolverContext<'_>, player: PlayerId, card: CardKind) -> Result<()> {
        ctx.state.zones_mut(player).discard_from_hand(card)?;
        debug!("{} plays {card}", ctx.state.zones(player).name);
        ctx.state.record(player, GameEvent::Played(card));

        let mut frame = PlayFrame::new(card);
        Self::resolve(ctx, player, &mut frame)?;

        ctx.state.turn.actions = ctx.state.turn.actions.saturating_sub(1);
        Ok(())
    }

    /// Run the pipeline of `frame.source` once for `player`.
    pub fn resolve(ctx: &mut ResolverContext<'_>, player: PlayerId, frame: &mut PlayFrame) -> Result<()> {
        let definition = frame.source.definition();

        ctx.state.draw_cards(player, definition.plus_cards);

        let turn = &mut ctx.state.turn;
        turn.actions += definition.plus_actions;
        turn.buys += definition.plus_buys;
        turn.coins += definition.coins;

        if let Some(ability) = definition.ability {
            abilities::resolve_ability(ctx, player, ability, frame)?;
        }
        Ok(())
    }
}
