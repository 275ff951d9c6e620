//! Decision labels and the game event record.
//!
//! Every decision the engine asks of an agent is a menu of [`Choice`]
//! labels; the agent answers with one of them. Sentinels such as
//! "end the action phase" sit on the same menu as the card labels.
//!
//! Everything that changes a player's cards is recorded as a
//! [`GameEvent`] in the game history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::CardKind;

/// A label on a decision menu.
///
/// `Display` gives the label text shown to agents (`end_action_phase`,
/// `no_action`, a card name, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Stop playing action cards.
    EndActionPhase,
    /// Stop buying cards.
    EndBuyPhase,
    /// Throne Room: double nothing.
    NoAction,
    /// Keep the revealed or drawn card.
    KeepCard,
    /// Decline an optional gain.
    Decline,
    Yes,
    No,
    Card(CardKind),
}

impl Choice {
    /// The card this label names, if any.
    #[must_use]
    pub fn card(self) -> Option<CardKind> {
        match self {
            Choice::Card(kind) => Some(kind),
            _ => None,
        }
    }
}

impl From<CardKind> for Choice {
    fn from(kind: CardKind) -> Self {
        Choice::Card(kind)
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::EndActionPhase => f.write_str("end_action_phase"),
            Choice::EndBuyPhase => f.write_str("end_buy_phase"),
            Choice::NoAction => f.write_str("no_action"),
            Choice::KeepCard => f.write_str("keep_card"),
            Choice::Decline => f.write_str("decline"),
            Choice::Yes => f.write_str("Yes"),
            Choice::No => f.write_str("No"),
            Choice::Card(kind) => f.write_str(kind.name()),
        }
    }
}

/// A decision menu.
///
/// SmallVec keeps the common menus (a handful of labels) off the heap.
pub type Menu = SmallVec<[Choice; 8]>;

/// Build a menu from a leading sentinel and the distinct kinds in `cards`,
/// in first-seen order.
#[must_use]
pub fn distinct_menu(lead: Option<Choice>, cards: impl IntoIterator<Item = CardKind>) -> Menu {
    let mut menu = Menu::new();
    menu.extend(lead);
    for kind in cards {
        let choice = Choice::Card(kind);
        if !menu.contains(&choice) {
            menu.push(choice);
        }
    }
    menu
}

/// Where a gained card lands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    #[default]
    Discard,
    Hand,
    DeckTop,
}

/// Something that happened to a player's cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnStarted,
    Played(CardKind),
    Bought(CardKind),
    Gained { card: CardKind, destination: Destination },
    Trashed(CardKind),
    Discarded(CardKind),
    Topdecked(CardKind),
    Revealed(CardKind),
    /// An attack on this player was stopped by a reaction in hand.
    AttackBlocked(CardKind),
    /// The draw pile was rebuilt from the discard pile on purpose.
    Reshuffled,
    TurnEnded,
}

/// A recorded event with the player and turn it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The player whose cards were affected.
    pub player: PlayerId,

    pub event: GameEvent,

    /// Turn number (starting at 1) when the event happened.
    pub turn: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Choice::EndActionPhase.to_string(), "end_action_phase");
        assert_eq!(Choice::EndBuyPhase.to_string(), "end_buy_phase");
        assert_eq!(Choice::NoAction.to_string(), "no_action");
        assert_eq!(Choice::KeepCard.to_string(), "keep_card");
        assert_eq!(Choice::Yes.to_string(), "Yes");
        assert_eq!(Choice::Card(CardKind::CouncilRoom).to_string(), "Council Room");
    }

    #[test]
    fn test_card_accessor() {
        assert_eq!(Choice::from(CardKind::Gold).card(), Some(CardKind::Gold));
        assert_eq!(Choice::Decline.card(), None);
    }

    #[test]
    fn test_distinct_menu() {
        let hand = [
            CardKind::Village,
            CardKind::Smithy,
            CardKind::Village,
            CardKind::Market,
        ];
        let menu = distinct_menu(Some(Choice::EndActionPhase), hand);
        assert_eq!(
            menu.as_slice(),
            &[
                Choice::EndActionPhase,
                Choice::Card(CardKind::Village),
                Choice::Card(CardKind::Smithy),
                Choice::Card(CardKind::Market),
            ]
        );

        assert!(distinct_menu(None, []).is_empty());
    }

    #[test]
    fn test_event_record_serde() {
        let record = EventRecord {
            player: PlayerId::new(1),
            event: GameEvent::Gained {
                card: CardKind::Silver,
                destination: Destination::DeckTop,
            },
            turn: 4,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
