//! Special abilities, one procedure per [`Ability`].
//!
//! Abilities run after the static bonuses of the card that carries them.
//! Attacks consult [`attack_targets`] once, up front; players holding a
//! reaction with attack immunity are left alone.

use log::debug;

use crate::agents::{CountDecision, Decision};
use crate::cards::{Ability, CardKind};
use crate::core::{distinct_menu, Choice, Destination, GameEvent, PlayerId};
use crate::error::Result;

use super::primitives::{
    attack_targets, discard_from_hand, gain_card, gain_from_supply, other_players, trash_card,
    trash_from_hand, GainRequest,
};
use super::resolver::{EffectResolver, PlayFrame, ResolverContext};

/// Treasures Mine can gain.
const MINE_TREASURES: [CardKind; 3] = [CardKind::Copper, CardKind::Silver, CardKind::Gold];

/// Hand size Militia attacks reduce to.
const MILITIA_HAND: usize = 3;

/// Hand size Library draws up to.
const LIBRARY_HAND: usize = 7;

/// Most cards Chapel may trash.
const CHAPEL_TRASH: usize = 4;

/// Run `ability` for `player`.
pub fn resolve_ability(
    ctx: &mut ResolverContext<'_>,
    player: PlayerId,
    ability: Ability,
    frame: &mut PlayFrame,
) -> Result<()> {
    match ability {
        Ability::DiscardThenDraw => cellar(ctx, player),
        Ability::TrashUpToFour => chapel(ctx, player),
        Ability::OptionalReshuffle => chancellor(ctx, player),
        Ability::GainCostingUpTo(limit) => gain_card(ctx, player, GainRequest::up_to(limit)).map(drop),
        Ability::TrashSelfThenGain(limit) => feast(ctx, player, limit, frame),
        Ability::TopdeckVictoryAttack => bureaucrat(ctx, player),
        Ability::DiscardDownToThree => militia(ctx, player),
        Ability::TrashCopperForCoins => moneylender(ctx, player),
        Ability::TrashThenGain { plus } => remodel(ctx, player, plus),
        Ability::UpgradeTreasure { plus } => mine(ctx, player, plus),
        Ability::RevealTopCards => spy(ctx, player),
        Ability::StealTreasure => thief(ctx, player),
        Ability::PlayTwice => throne_room(ctx, player),
        Ability::OthersDraw => council_room(ctx, player),
        Ability::DrawToSeven => library(ctx, player),
        Ability::CurseOthers => witch(ctx, player),
        Ability::DigForTreasures => adventurer(ctx, player),
    }
}

// === Hand manipulation ===

fn cellar(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    let max = ctx.state.zones(player).hand.len();
    let count = ctx.choose_count(player, CountDecision::Discard, max)?;
    for _ in 0..count {
        discard_from_hand(ctx, player)?;
    }
    ctx.state.draw_cards(player, count as u32);
    Ok(())
}

fn chapel(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    let max = ctx.state.zones(player).hand.len().min(CHAPEL_TRASH);
    let count = ctx.choose_count(player, CountDecision::Trash, max)?;
    for _ in 0..count {
        trash_from_hand(ctx, player, |_| true)?;
    }
    Ok(())
}

fn chancellor(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    if ctx.choose(player, Decision::Shuffle, &[Choice::Yes, Choice::No])? == Choice::Yes {
        let state = &mut *ctx.state;
        state.players[player].deck.shuffle_deck(&mut state.rng);
        state.record(player, GameEvent::Reshuffled);
    }
    Ok(())
}

fn moneylender(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    if ctx.state.zones(player).hand.contains(CardKind::Copper) {
        trash_card(ctx.state, player, CardKind::Copper)?;
        ctx.state.turn.coins += 3;
    }
    Ok(())
}

// === Trash and gain ===

fn feast(ctx: &mut ResolverContext<'_>, player: PlayerId, limit: u32, frame: &mut PlayFrame) -> Result<()> {
    if !frame.source_trashed {
        frame.source_trashed = true;
        let state = &mut *ctx.state;
        if state.players[player].deck.remove_from_discard(frame.source) {
            state.trash.push(frame.source);
            state.record(player, GameEvent::Trashed(frame.source));
        }
    }
    gain_card(ctx, player, GainRequest::up_to(limit))?;
    Ok(())
}

fn remodel(ctx: &mut ResolverContext<'_>, player: PlayerId, plus: u32) -> Result<()> {
    if let Some(trashed) = trash_from_hand(ctx, player, |_| true)? {
        gain_card(ctx, player, GainRequest::up_to(trashed.cost() + plus))?;
    }
    Ok(())
}

fn mine(ctx: &mut ResolverContext<'_>, player: PlayerId, plus: u32) -> Result<()> {
    if let Some(trashed) = trash_from_hand(ctx, player, CardKind::is_treasure)? {
        let request = GainRequest::up_to(trashed.cost() + plus)
            .of_kinds(&MINE_TREASURES)
            .to(Destination::Hand);
        gain_card(ctx, player, request)?;
    }
    Ok(())
}

// === Attacks ===

fn bureaucrat(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    gain_from_supply(ctx.state, player, CardKind::Silver, Destination::DeckTop)?;

    for target in attack_targets(ctx.state, player) {
        let zones = ctx.state.zones_mut(target);
        let Some(victory) = zones.hand.iter().find(|k| k.is_victory()) else {
            continue;
        };
        zones.hand.remove(victory);
        zones.deck.put_on_top(victory);
        ctx.state.record(target, GameEvent::Topdecked(victory));
    }
    Ok(())
}

fn militia(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    for target in attack_targets(ctx.state, player) {
        while ctx.state.zones(target).hand.len() > MILITIA_HAND {
            discard_from_hand(ctx, target)?;
        }
    }
    Ok(())
}

fn witch(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    for target in attack_targets(ctx.state, player) {
        gain_from_supply(ctx.state, target, CardKind::Curse, Destination::Discard)?;
    }
    Ok(())
}

fn spy(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    let mut revealers = vec![player];
    revealers.extend(attack_targets(ctx.state, player));

    for target in revealers {
        let Some(card) = ctx.state.reveal_top(target) else {
            continue;
        };
        ctx.state.record(target, GameEvent::Revealed(card));

        let menu = [Choice::KeepCard, Choice::Card(card)];
        if ctx.choose(player, Decision::Discard, &menu)? == Choice::KeepCard {
            ctx.state.zones_mut(target).deck.put_on_top(card);
        } else {
            ctx.state.zones_mut(target).deck.discard(card);
            ctx.state.record(target, GameEvent::Discarded(card));
        }
    }
    Ok(())
}

fn thief(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    for target in attack_targets(ctx.state, player) {
        let mut revealed = Vec::with_capacity(2);
        for _ in 0..2 {
            if let Some(card) = ctx.state.reveal_top(target) {
                ctx.state.record(target, GameEvent::Revealed(card));
                revealed.push(card);
            }
        }

        let treasures = distinct_menu(None, revealed.iter().copied().filter(|k| k.is_treasure()));
        if !treasures.is_empty() {
            if let Some(stolen) = ctx.choose(player, Decision::Trash, &treasures)?.card() {
                if let Some(pos) = revealed.iter().position(|&k| k == stolen) {
                    revealed.remove(pos);
                }
                ctx.state.trash.push(stolen);
                debug!("{} trashes {stolen} from {}", ctx.state.zones(player).name, ctx.state.zones(target).name);
                ctx.state.record(target, GameEvent::Trashed(stolen));

                let menu = [Choice::Card(stolen), Choice::Decline];
                if ctx.choose(player, Decision::Gain, &menu)? == Choice::Card(stolen) {
                    if let Some(pos) = ctx.state.trash.iter().rposition(|&k| k == stolen) {
                        ctx.state.trash.remove(pos);
                    }
                    ctx.state.zones_mut(player).deck.discard(stolen);
                    ctx.state.record(
                        player,
                        GameEvent::Gained {
                            card: stolen,
                            destination: Destination::Discard,
                        },
                    );
                }
            }
        }

        for card in revealed {
            ctx.state.zones_mut(target).deck.discard(card);
            ctx.state.record(target, GameEvent::Discarded(card));
        }
    }
    Ok(())
}

// === Multi-player and doubling ===

fn council_room(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    for other in other_players(player, ctx.state.player_count()) {
        ctx.state.draw_card(other);
    }
    Ok(())
}

fn throne_room(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    let menu = distinct_menu(
        Some(Choice::NoAction),
        ctx.state.zones(player).hand.iter().filter(|k| k.is_action()),
    );
    let Some(card) = ctx.choose(player, Decision::Action, &menu)?.card() else {
        return Ok(());
    };

    ctx.state.zones_mut(player).discard_from_hand(card)?;
    debug!("{} plays {card} twice", ctx.state.zones(player).name);
    ctx.state.record(player, GameEvent::Played(card));

    let mut frame = PlayFrame::new(card);
    EffectResolver::resolve(ctx, player, &mut frame)?;
    EffectResolver::resolve(ctx, player, &mut frame)
}

// === Digging ===

fn library(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    let deck_size = ctx.state.zones(player).deck.len();
    let mut drawn = 0;
    let mut set_aside = Vec::new();

    while ctx.state.zones(player).hand.len() < LIBRARY_HAND && drawn < deck_size {
        let Some(card) = ctx.state.reveal_top(player) else {
            break;
        };
        drawn += 1;

        if card.is_action() {
            let menu = [Choice::KeepCard, Choice::Card(card)];
            if ctx.choose(player, Decision::Discard, &menu)? != Choice::KeepCard {
                set_aside.push(card);
                continue;
            }
        }
        ctx.state.zones_mut(player).hand.add(card);
    }

    discard_set_aside(ctx, player, set_aside);
    Ok(())
}

/// Reveal until 2 Treasures reach the hand.
///
/// Non-Treasures are set aside and discarded only once digging stops, so
/// they cannot be reshuffled back into the cards being revealed. Discarding
/// each one as it appears would let it come round again mid-dig.
fn adventurer(ctx: &mut ResolverContext<'_>, player: PlayerId) -> Result<()> {
    let deck_size = ctx.state.zones(player).deck.len();
    let mut drawn = 0;
    let mut found = 0;
    let mut set_aside = Vec::new();

    while found < 2 && drawn < deck_size {
        let Some(card) = ctx.state.reveal_top(player) else {
            break;
        };
        drawn += 1;

        if card.is_treasure() {
            ctx.state.zones_mut(player).hand.add(card);
            found += 1;
        } else {
            set_aside.push(card);
        }
    }

    discard_set_aside(ctx, player, set_aside);
    Ok(())
}

fn discard_set_aside(ctx: &mut ResolverContext<'_>, player: PlayerId, cards: Vec<CardKind>) {
    for card in cards {
        ctx.state.zones_mut(player).deck.discard(card);
        ctx.state.record(player, GameEvent::Discarded(card));
    }
}
