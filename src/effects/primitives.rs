//! Shared sub-protocols used by several abilities.
//!
//! Gaining, discarding and trashing a chosen card all build a menu, skip
//! the decision when the menu is empty, ask the agent, and move the card.

use log::debug;

use crate::agents::Decision;
use crate::cards::CardKind;
use crate::core::{distinct_menu, Choice, Destination, GameEvent, GameState, Menu, PlayerId};
use crate::error::Result;
use crate::zones::{PlayerZones, Supply};

use super::ResolverContext;

/// Cost limit used when a gain has no upper bound.
pub const UNLIMITED_COST: u32 = 99;

/// What a gain may take and where it lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GainRequest {
    /// Highest cost on offer (inclusive).
    pub cost_limit: u32,
    /// Restrict the candidates to these kinds.
    pub valid_kinds: Option<&'static [CardKind]>,
    pub destination: Destination,
    /// Offer `Decline` alongside the cards.
    pub optional: bool,
}

impl Default for GainRequest {
    fn default() -> Self {
        Self {
            cost_limit: UNLIMITED_COST,
            valid_kinds: None,
            destination: Destination::Discard,
            optional: false,
        }
    }
}

impl GainRequest {
    /// Any card costing up to `cost_limit`, to the discard pile.
    #[must_use]
    pub fn up_to(cost_limit: u32) -> Self {
        Self {
            cost_limit,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn of_kinds(mut self, kinds: &'static [CardKind]) -> Self {
        self.valid_kinds = Some(kinds);
        self
    }

    #[must_use]
    pub fn to(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Candidates for a gain, in supply order.
///
/// Empty when nothing qualifies, even for optional gains.
#[must_use]
pub fn gain_menu(supply: &Supply, request: &GainRequest) -> Menu {
    let mut menu: Menu = supply
        .cheapest_available(request.cost_limit)
        .into_iter()
        .filter(|kind| request.valid_kinds.map_or(true, |kinds| kinds.contains(kind)))
        .map(Choice::Card)
        .collect();
    if request.optional && !menu.is_empty() {
        menu.push(Choice::Decline);
    }
    menu
}

/// Let `player` pick a card from the supply.
///
/// Returns the gained kind, or `None` when nothing qualified or the gain
/// was declined.
pub fn gain_card(ctx: &mut ResolverContext<'_>, player: PlayerId, request: GainRequest) -> Result<Option<CardKind>> {
    let menu = gain_menu(&ctx.state.supply, &request);
    if menu.is_empty() {
        debug!("{} has nothing to gain", ctx.state.zones(player).name);
        return Ok(None);
    }

    match ctx.choose(player, Decision::Gain, &menu)? {
        Choice::Card(kind) => {
            gain_from_supply(ctx.state, player, kind, request.destination)?;
            Ok(Some(kind))
        }
        _ => Ok(None),
    }
}

/// Move one `kind` from the supply to `player` without asking.
///
/// Returns false when the pile is empty.
pub fn gain_from_supply(state: &mut GameState, player: PlayerId, kind: CardKind, destination: Destination) -> Result<bool> {
    if state.supply.is_empty(kind) {
        return Ok(false);
    }
    state.supply.remove_top(kind)?;
    place(state.zones_mut(player), kind, destination);

    debug!("{} gains {kind}", state.zones(player).name);
    state.record(player, GameEvent::Gained { card: kind, destination });
    Ok(true)
}

/// Put a card into one of `zones`' locations.
pub fn place(zones: &mut PlayerZones, kind: CardKind, destination: Destination) {
    match destination {
        Destination::Discard => zones.deck.discard(kind),
        Destination::Hand => zones.hand.add(kind),
        Destination::DeckTop => zones.deck.put_on_top(kind),
    }
}

/// `player` discards a card of their choice from hand.
///
/// The menu is the distinct kinds in hand. Returns `None` for an empty hand.
pub fn discard_from_hand(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<Option<CardKind>> {
    let menu = distinct_menu(None, ctx.state.zones(player).hand.iter());
    if menu.is_empty() {
        return Ok(None);
    }

    let Some(kind) = ctx.choose(player, Decision::Discard, &menu)?.card() else {
        return Ok(None);
    };
    ctx.state.zones_mut(player).discard_from_hand(kind)?;
    ctx.state.record(player, GameEvent::Discarded(kind));
    Ok(Some(kind))
}

/// `player` trashes a card of their choice among those in hand matching
/// `filter`.
///
/// Returns the trashed kind, or `None` when nothing in hand matches.
pub fn trash_from_hand(
    ctx: &mut ResolverContext<'_>,
    player: PlayerId,
    filter: impl Fn(CardKind) -> bool,
) -> Result<Option<CardKind>> {
    let menu = distinct_menu(None, ctx.state.zones(player).hand.iter().filter(|&k| filter(k)));
    if menu.is_empty() {
        return Ok(None);
    }

    let Some(kind) = ctx.choose(player, Decision::Trash, &menu)?.card() else {
        return Ok(None);
    };
    trash_card(ctx.state, player, kind)?;
    Ok(Some(kind))
}

/// Move a specific card from `player`'s hand to the trash.
pub fn trash_card(state: &mut GameState, player: PlayerId, kind: CardKind) -> Result<()> {
    state.zones_mut(player).take_from_hand(kind)?;
    state.trash.push(kind);

    debug!("{} trashes {kind}", state.zones(player).name);
    state.record(player, GameEvent::Trashed(kind));
    Ok(())
}

/// The card in hand that makes its holder immune to attacks, if any.
#[must_use]
pub fn blocking_card(zones: &PlayerZones) -> Option<CardKind> {
    zones.hand.iter().find(|kind| kind.definition().attack_immunity)
}

/// Whether an attack on the holder of `zones` takes effect.
#[must_use]
pub fn successful_attack(zones: &PlayerZones) -> bool {
    blocking_card(zones).is_none()
}

/// Every seat except `player`, in turn order starting after them.
pub fn other_players(player: PlayerId, player_count: usize) -> impl Iterator<Item = PlayerId> {
    player.others(player_count)
}

/// The other players an attack by `player` reaches.
///
/// Blocked targets are logged and recorded.
pub fn attack_targets(state: &mut GameState, player: PlayerId) -> Vec<PlayerId> {
    let mut targets = Vec::new();
    for target in other_players(player, state.player_count()) {
        match blocking_card(state.zones(target)) {
            None => targets.push(target),
            Some(reaction) => {
                debug!("{} blocks the attack with {reaction}", state.zones(target).name);
                state.record(target, GameEvent::AttackBlocked(reaction));
            }
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{Agent, ScriptedAgent};
    use crate::core::{CardSet, GameConfig, PlayerMap};
    use crate::zones::Hand;

    fn setup(player_count: usize) -> GameState {
        let config = GameConfig::new(player_count).with_card_set(CardSet::Base);
        let names: Vec<String> = (1..=player_count).map(|i| format!("P{i}")).collect();
        GameState::new(&config, &names).unwrap()
    }

    fn agents(player_count: usize, first: ScriptedAgent) -> PlayerMap<Box<dyn Agent>> {
        let mut first = Some(first);
        PlayerMap::new(player_count, |_| {
            Box::new(first.take().unwrap_or_default()) as Box<dyn Agent>
        })
    }

    #[test]
    fn test_gain_menu_cost_boundary() {
        let supply = Supply::from_piles([
            (CardKind::Copper, 5),
            (CardKind::Silver, 5),
            (CardKind::Smithy, 5),
            (CardKind::Market, 5),
        ]);

        let menu = gain_menu(&supply, &GainRequest::up_to(4));
        assert_eq!(
            menu.as_slice(),
            &[
                Choice::Card(CardKind::Copper),
                Choice::Card(CardKind::Silver),
                Choice::Card(CardKind::Smithy),
            ]
        );
    }

    #[test]
    fn test_gain_menu_kinds_and_decline() {
        let supply = Supply::from_piles([
            (CardKind::Copper, 5),
            (CardKind::Silver, 0),
            (CardKind::Gold, 5),
            (CardKind::Village, 5),
        ]);
        const TREASURES: [CardKind; 3] = [CardKind::Copper, CardKind::Silver, CardKind::Gold];

        let request = GainRequest::up_to(6).of_kinds(&TREASURES).optional();
        let menu = gain_menu(&supply, &request);
        assert_eq!(
            menu.as_slice(),
            &[
                Choice::Card(CardKind::Copper),
                Choice::Card(CardKind::Gold),
                Choice::Decline,
            ]
        );

        let nothing = GainRequest::up_to(6).of_kinds(&[CardKind::Silver]).optional();
        assert!(gain_menu(&supply, &nothing).is_empty());
    }

    #[test]
    fn test_gain_card_to_hand() {
        let mut state = setup(2);
        let mut agents = agents(2, ScriptedAgent::new().then(CardKind::Silver));
        let p0 = PlayerId::new(0);
        let hand_before = state.zones(p0).hand.len();

        let mut ctx = ResolverContext::new(&mut state, &mut agents);
        let gained = gain_card(&mut ctx, p0, GainRequest::up_to(3).to(Destination::Hand)).unwrap();

        assert_eq!(gained, Some(CardKind::Silver));
        assert_eq!(state.zones(p0).hand.len(), hand_before + 1);
        assert_eq!(state.supply.count(CardKind::Silver), 39);
    }

    #[test]
    fn test_gain_card_skips_empty_menu() {
        let mut state = setup(2);
        state.supply = Supply::from_piles([(CardKind::Gold, 3)]);
        // An answer off the menu would error if the agent were asked.
        let mut agents = agents(2, ScriptedAgent::new().then(CardKind::Province));

        let mut ctx = ResolverContext::new(&mut state, &mut agents);
        let gained = gain_card(&mut ctx, PlayerId::new(0), GainRequest::up_to(5)).unwrap();
        assert_eq!(gained, None);
    }

    #[test]
    fn test_gain_card_declined() {
        let mut state = setup(2);
        let mut agents = agents(2, ScriptedAgent::new().then(Choice::Decline));

        let mut ctx = ResolverContext::new(&mut state, &mut agents);
        let gained = gain_card(&mut ctx, PlayerId::new(0), GainRequest::up_to(4).optional()).unwrap();
        assert_eq!(gained, None);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_discard_and_trash_from_hand() {
        let mut state = setup(2);
        let p0 = PlayerId::new(0);
        state.players[p0].hand = [CardKind::Estate, CardKind::Copper, CardKind::Copper]
            .into_iter()
            .collect::<Hand>();
        let mut agents = agents(
            2,
            ScriptedAgent::new().then(CardKind::Copper).then(CardKind::Estate),
        );

        let mut ctx = ResolverContext::new(&mut state, &mut agents);
        assert_eq!(discard_from_hand(&mut ctx, p0).unwrap(), Some(CardKind::Copper));
        assert_eq!(
            trash_from_hand(&mut ctx, p0, |_| true).unwrap(),
            Some(CardKind::Estate)
        );
        assert_eq!(trash_from_hand(&mut ctx, p0, CardKind::is_action).unwrap(), None);

        assert_eq!(state.zones(p0).hand.as_slice(), &[CardKind::Copper]);
        assert_eq!(state.trash, vec![CardKind::Estate]);
        assert_eq!(state.zones(p0).deck.discard_pile, vec![CardKind::Copper]);
    }

    #[test]
    fn test_moat_blocks_attack() {
        let mut state = setup(3);
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        state.players[p1].hand.add(CardKind::Moat);

        assert!(!successful_attack(state.zones(p1)));
        assert!(successful_attack(state.zones(PlayerId::new(2))));

        let targets = attack_targets(&mut state, p0);
        assert_eq!(targets, vec![PlayerId::new(2)]);
        assert_eq!(
            state.events_for(p1).collect::<Vec<_>>(),
            vec![&GameEvent::AttackBlocked(CardKind::Moat)]
        );
    }

    #[test]
    fn test_other_players_order() {
        let others: Vec<_> = other_players(PlayerId::new(1), 4).collect();
        assert_eq!(others, vec![PlayerId::new(2), PlayerId::new(3), PlayerId::new(0)]);
    }
}
