//! Card effects: the resolution pipeline, shared sub-protocols and the
//! named abilities.
//!
//! - `EffectResolver`: plays a card and runs its bonus-then-ability pipeline
//! - `primitives`: gain / discard / trash with a choice, attack checks
//! - `abilities`: one procedure per [`crate::cards::Ability`]
//!
//! Every decision goes through [`ResolverContext::choose`], which rejects
//! answers that were not on the menu.

mod abilities;
pub mod primitives;
mod resolver;

pub use abilities::resolve_ability;
pub use primitives::{
    attack_targets, blocking_card, discard_from_hand, gain_card, gain_from_supply, gain_menu,
    other_players, successful_attack, trash_card, trash_from_hand, GainRequest, UNLIMITED_COST,
};
pub use resolver::{EffectResolver, PlayFrame, ResolverContext};
