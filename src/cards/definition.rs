//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card kind.
//! Every kind carries the same set of fields; a card without a bonus
//! simply has zero for it, and a card without a special ability has
//! `ability: None`. Copies of a kind are interchangeable, so the game only
//! ever moves `CardKind` values between piles.

use serde::{Deserialize, Serialize};

/// Every card kind in the game.
///
/// The discriminant indexes the static catalog, so the order here must
/// match [`crate::cards::catalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    // === Base cards ===
    Copper,
    Silver,
    Gold,
    Estate,
    Duchy,
    Province,
    Curse,

    // === Kingdom cards ===
    Cellar,
    Chapel,
    Moat,
    Chancellor,
    Village,
    Woodcutter,
    Workshop,
    Bureaucrat,
    Feast,
    Gardens,
    Militia,
    Moneylender,
    Remodel,
    Smithy,
    Spy,
    Thief,
    ThroneRoom,
    CouncilRoom,
    Festival,
    Laboratory,
    Library,
    Market,
    Mine,
    Witch,
    Adventurer,
}

impl CardKind {
    /// Number of card kinds.
    pub const COUNT: usize = 32;

    /// Static definition for this kind.
    #[must_use]
    pub fn definition(self) -> &'static CardDefinition {
        &super::registry::CATALOG[self as usize]
    }

    /// Unique display name, also used as the menu label.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Cost in coins.
    #[must_use]
    pub fn cost(self) -> u32 {
        self.definition().cost
    }

    /// Main card type.
    #[must_use]
    pub fn category(self) -> Category {
        self.definition().category
    }

    #[must_use]
    pub fn is_action(self) -> bool {
        self.category() == Category::Action
    }

    #[must_use]
    pub fn is_treasure(self) -> bool {
        self.category() == Category::Treasure
    }

    #[must_use]
    pub fn is_victory(self) -> bool {
        self.category() == Category::Victory
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for CardKind {
    type Err = crate::error::DominionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::registry::lookup(s).map(|def| def.kind)
    }
}

/// Main card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Treasure,
    Victory,
    Curse,
    Action,
}

/// Secondary card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subcategory {
    Attack,
    Reaction,
}

/// Special ability procedures, keyed by what they do.
///
/// Resolved by [`crate::effects::EffectResolver`] after the static bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Discard any number of cards, then draw that many.
    DiscardThenDraw,
    /// Trash up to 4 cards from hand.
    TrashUpToFour,
    /// May reshuffle the discard pile into the draw pile.
    OptionalReshuffle,
    /// Gain a card costing up to the given amount.
    GainCostingUpTo(u32),
    /// Trash the played card, then gain a card costing up to the given amount.
    TrashSelfThenGain(u32),
    /// Gain a Silver onto the deck; others put a Victory card from hand onto theirs.
    TopdeckVictoryAttack,
    /// Others discard down to 3 cards.
    DiscardDownToThree,
    /// Trash a Copper from hand for +3 coins.
    TrashCopperForCoins,
    /// Trash a card, gain one costing up to `plus` more.
    TrashThenGain { plus: u32 },
    /// Trash a Treasure, gain a Treasure costing up to `plus` more into hand.
    UpgradeTreasure { plus: u32 },
    /// Every player reveals their top card; the player decides its fate.
    RevealTopCards,
    /// Others reveal 2 cards and lose a Treasure the player may gain.
    StealTreasure,
    /// Play an action card from hand twice.
    PlayTwice,
    /// Every other player draws a card.
    OthersDraw,
    /// Draw to 7 cards, optionally setting aside Action cards.
    DrawToSeven,
    /// Every other player gains a Curse.
    CurseOthers,
    /// Reveal cards until 2 Treasures are found.
    DigForTreasures,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use dominion_engine::cards::{CardKind, Category};
///
/// let smithy = CardKind::Smithy.definition();
/// assert_eq!(smithy.cost, 4);
/// assert_eq!(smithy.category, Category::Action);
/// assert_eq!(smithy.plus_cards, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardDefinition {
    pub kind: CardKind,
    pub name: &'static str,
    pub cost: u32,
    pub category: Category,
    pub subcategory: Option<Subcategory>,
    pub plus_cards: u32,
    pub plus_actions: u32,
    pub plus_buys: u32,
    pub coins: u32,
    pub victory_points: i32,
    pub ability: Option<Ability>,
    /// Holding this card in hand blocks every attack.
    pub attack_immunity: bool,
}

impl CardDefinition {
    /// Create a definition with no bonuses.
    #[must_use]
    pub const fn new(kind: CardKind, name: &'static str, cost: u32, category: Category) -> Self {
        Self {
            kind,
            name,
            cost,
            category,
            subcategory: None,
            plus_cards: 0,
            plus_actions: 0,
            plus_buys: 0,
            coins: 0,
            victory_points: 0,
            ability: None,
            attack_immunity: false,
        }
    }

    #[must_use]
    pub const fn attack(mut self) -> Self {
        self.subcategory = Some(Subcategory::Attack);
        self
    }

    /// Mark as a Reaction that blocks attacks while in hand.
    #[must_use]
    pub const fn immunity_reaction(mut self) -> Self {
        self.subcategory = Some(Subcategory::Reaction);
        self.attack_immunity = true;
        self
    }

    #[must_use]
    pub const fn cards(mut self, n: u32) -> Self {
        self.plus_cards = n;
        self
    }

    #[must_use]
    pub const fn actions(mut self, n: u32) -> Self {
        self.plus_actions = n;
        self
    }

    #[must_use]
    pub const fn buys(mut self, n: u32) -> Self {
        self.plus_buys = n;
        self
    }

    #[must_use]
    pub const fn coins(mut self, n: u32) -> Self {
        self.coins = n;
        self
    }

    #[must_use]
    pub const fn victory(mut self, vp: i32) -> Self {
        self.victory_points = vp;
        self
    }

    #[must_use]
    pub const fn ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.subcategory == Some(Subcategory::Attack)
    }
}
