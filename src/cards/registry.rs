//! The static card catalog.
//!
//! Every card kind is declared once here, at compile time. The table is
//! indexed by `CardKind` discriminant; a name index is built on first use
//! and is read-only thereafter.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::definition::{Ability, CardDefinition, CardKind, Category};
use crate::error::{DominionError, Result};

pub(crate) static CATALOG: [CardDefinition; CardKind::COUNT] = [
    CardDefinition::new(CardKind::Copper, "Copper", 0, Category::Treasure).coins(1),
    CardDefinition::new(CardKind::Silver, "Silver", 3, Category::Treasure).coins(2),
    CardDefinition::new(CardKind::Gold, "Gold", 6, Category::Treasure).coins(3),
    CardDefinition::new(CardKind::Estate, "Estate", 2, Category::Victory).victory(1),
    CardDefinition::new(CardKind::Duchy, "Duchy", 5, Category::Victory).victory(3),
    CardDefinition::new(CardKind::Province, "Province", 8, Category::Victory).victory(6),
    CardDefinition::new(CardKind::Curse, "Curse", 0, Category::Curse).victory(-1),
    CardDefinition::new(CardKind::Cellar, "Cellar", 2, Category::Action)
        .actions(1)
        .ability(Ability::DiscardThenDraw),
    CardDefinition::new(CardKind::Chapel, "Chapel", 2, Category::Action)
        .ability(Ability::TrashUpToFour),
    CardDefinition::new(CardKind::Moat, "Moat", 2, Category::Action)
        .immunity_reaction()
        .cards(2),
    CardDefinition::new(CardKind::Chancellor, "Chancellor", 3, Category::Action)
        .coins(2)
        .ability(Ability::OptionalReshuffle),
    CardDefinition::new(CardKind::Village, "Village", 3, Category::Action)
        .cards(1)
        .actions(2),
    CardDefinition::new(CardKind::Woodcutter, "Woodcutter", 3, Category::Action)
        .buys(1)
        .coins(2),
    CardDefinition::new(CardKind::Workshop, "Workshop", 3, Category::Action)
        .ability(Ability::GainCostingUpTo(4)),
    CardDefinition::new(CardKind::Bureaucrat, "Bureaucrat", 4, Category::Action)
        .attack()
        .ability(Ability::TopdeckVictoryAttack),
    CardDefinition::new(CardKind::Feast, "Feast", 4, Category::Action)
        .ability(Ability::TrashSelfThenGain(5)),
    CardDefinition::new(CardKind::Gardens, "Gardens", 4, Category::Victory),
    CardDefinition::new(CardKind::Militia, "Militia", 4, Category::Action)
        .attack()
        .coins(2)
        .ability(Ability::DiscardDownToThree),
    CardDefinition::new(CardKind::Moneylender, "Moneylender", 4, Category::Action)
        .ability(Ability::TrashCopperForCoins),
    CardDefinition::new(CardKind::Remodel, "Remodel", 4, Category::Action)
        .ability(Ability::TrashThenGain { plus: 2 }),
    CardDefinition::new(CardKind::Smithy, "Smithy", 4, Category::Action).cards(3),
    CardDefinition::new(CardKind::Spy, "Spy", 4, Category::Action)
        .attack()
        .cards(1)
        .actions(1)
        .ability(Ability::RevealTopCards),
    CardDefinition::new(CardKind::Thief, "Thief", 4, Category::Action)
        .attack()
        .ability(Ability::StealTreasure),
    CardDefinition::new(CardKind::ThroneRoom, "Throne Room", 4, Category::Action)
        .ability(Ability::PlayTwice),
    CardDefinition::new(CardKind::CouncilRoom, "Council Room", 5, Category::Action)
        .cards(4)
        .buys(1)
        .ability(Ability::OthersDraw),
    CardDefinition::new(CardKind::Festival, "Festival", 5, Category::Action)
        .actions(2)
        .buys(1)
        .coins(2),
    CardDefinition::new(CardKind::Laboratory, "Laboratory", 5, Category::Action)
        .cards(2)
        .actions(1),
    CardDefinition::new(CardKind::Library, "Library", 5, Category::Action)
        .ability(Ability::DrawToSeven),
    CardDefinition::new(CardKind::Market, "Market", 5, Category::Action)
        .cards(1)
        .actions(1)
        .buys(1)
        .coins(1),
    CardDefinition::new(CardKind::Mine, "Mine", 5, Category::Action)
        .ability(Ability::UpgradeTreasure { plus: 3 }),
    CardDefinition::new(CardKind::Witch, "Witch", 5, Category::Action)
        .attack()
        .cards(2)
        .ability(Ability::CurseOthers),
    CardDefinition::new(CardKind::Adventurer, "Adventurer", 6, Category::Action)
        .ability(Ability::DigForTreasures),
];

/// Cards present in every game.
pub const BASE_CARDS: [CardKind; 7] = [
    CardKind::Copper,
    CardKind::Silver,
    CardKind::Gold,
    CardKind::Estate,
    CardKind::Duchy,
    CardKind::Province,
    CardKind::Curse,
];

/// Every kingdom card that can be drawn into a random supply.
pub const KINGDOM_CARDS: [CardKind; 25] = [
    CardKind::Cellar,
    CardKind::Chapel,
    CardKind::Moat,
    CardKind::Chancellor,
    CardKind::Village,
    CardKind::Woodcutter,
    CardKind::Workshop,
    CardKind::Bureaucrat,
    CardKind::Feast,
    CardKind::Gardens,
    CardKind::Militia,
    CardKind::Moneylender,
    CardKind::Remodel,
    CardKind::Smithy,
    CardKind::Spy,
    CardKind::Thief,
    CardKind::ThroneRoom,
    CardKind::CouncilRoom,
    CardKind::Festival,
    CardKind::Laboratory,
    CardKind::Library,
    CardKind::Market,
    CardKind::Mine,
    CardKind::Witch,
    CardKind::Adventurer,
];

/// The fixed kingdom used by the `base` card set.
pub const BASE_KINGDOM: [CardKind; 10] = [
    CardKind::Cellar,
    CardKind::Moat,
    CardKind::Village,
    CardKind::Woodcutter,
    CardKind::Workshop,
    CardKind::Militia,
    CardKind::Remodel,
    CardKind::Smithy,
    CardKind::Market,
    CardKind::Mine,
];

/// Every card definition, in `CardKind` order.
#[must_use]
pub fn catalog() -> &'static [CardDefinition] {
    &CATALOG
}

/// Look up a definition by its display name.
///
/// Unknown names are a programming error in the caller and are reported
/// as [`DominionError::UnknownCard`].
pub fn lookup(name: &str) -> Result<&'static CardDefinition> {
    static BY_NAME: OnceLock<FxHashMap<&'static str, CardKind>> = OnceLock::new();

    let index = BY_NAME.get_or_init(|| CATALOG.iter().map(|def| (def.name, def.kind)).collect());

    index
        .get(name)
        .map(|kind| kind.definition())
        .ok_or_else(|| DominionError::UnknownCard(name.to_string()))
}
