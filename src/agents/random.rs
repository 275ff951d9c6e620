//! Uniform random agent.

use crate::core::{Choice, GameRng};

use super::Agent;

/// Picks uniformly from every menu.
///
/// Owns its own RNG so its choices never disturb the game's shuffles.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    fn pick<T: Copy>(&mut self, options: &[T]) -> T {
        let idx = self.rng.gen_range_usize(0..options.len());
        options[idx]
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, menu: &[Choice]) -> Choice {
        self.pick(menu)
    }

    fn select_buy(&mut self, menu: &[Choice]) -> Choice {
        self.pick(menu)
    }

    fn select_gain(&mut self, menu: &[Choice]) -> Choice {
        self.pick(menu)
    }

    fn select_discard(&mut self, menu: &[Choice]) -> Choice {
        self.pick(menu)
    }

    fn select_trash(&mut self, menu: &[Choice]) -> Choice {
        self.pick(menu)
    }

    fn select_n_discard(&mut self, counts: &[usize]) -> usize {
        self.pick(counts)
    }

    fn select_n_trash(&mut self, counts: &[usize]) -> usize {
        self.pick(counts)
    }

    fn select_shuffle(&mut self, menu: &[Choice]) -> Choice {
        self.pick(menu)
    }
}
