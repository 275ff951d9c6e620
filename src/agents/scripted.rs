//! Agent that replays a fixed list of answers.

use std::collections::VecDeque;

use crate::core::Choice;

use super::Agent;

/// Replays queued answers in order.
///
/// Label answers and count answers are kept in separate queues. Once a
/// queue runs dry the agent takes the first menu entry: the stop sentinel
/// on action, buy, Throne Room and keep-or-discard menus, 0 on count
/// menus, and `Yes` on Chancellor's `[Yes, No]` menu, so an unscripted
/// Chancellor reshuffles. Queued answers are returned as-is even when they
/// are not on the menu.
///
/// ```
/// use dominion_engine::agents::{Agent, ScriptedAgent};
/// use dominion_engine::cards::CardKind;
/// use dominion_engine::core::Choice;
///
/// let mut agent = ScriptedAgent::new().then(Choice::Card(CardKind::Silver));
/// let menu = [Choice::EndBuyPhase, Choice::Card(CardKind::Silver)];
///
/// assert_eq!(agent.select_buy(&menu), Choice::Card(CardKind::Silver));
/// assert_eq!(agent.select_buy(&menu), Choice::EndBuyPhase);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    choices: VecDeque<Choice>,
    counts: VecDeque<usize>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a label answer.
    #[must_use]
    pub fn then(mut self, choice: impl Into<Choice>) -> Self {
        self.choices.push_back(choice.into());
        self
    }

    /// Queue several label answers.
    #[must_use]
    pub fn then_all<C: Into<Choice>>(mut self, choices: impl IntoIterator<Item = C>) -> Self {
        self.choices.extend(choices.into_iter().map(Into::into));
        self
    }

    /// Queue a count answer.
    #[must_use]
    pub fn then_count(mut self, count: usize) -> Self {
        self.counts.push_back(count);
        self
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len() + self.counts.len()
    }

    fn next_choice(&mut self, menu: &[Choice]) -> Choice {
        self.choices.pop_front().unwrap_or(menu[0])
    }

    fn next_count(&mut self, counts: &[usize]) -> usize {
        self.counts.pop_front().unwrap_or(counts[0])
    }
}

impl Agent for ScriptedAgent {
    fn select_action(&mut self, menu: &[Choice]) -> Choice {
        self.next_choice(menu)
    }

    fn select_buy(&mut self, menu: &[Choice]) -> Choice {
        self.next_choice(menu)
    }

    fn select_gain(&mut self, menu: &[Choice]) -> Choice {
        self.next_choice(menu)
    }

    fn select_discard(&mut self, menu: &[Choice]) -> Choice {
        self.next_choice(menu)
    }

    fn select_trash(&mut self, menu: &[Choice]) -> Choice {
        self.next_choice(menu)
    }

    fn select_n_discard(&mut self, counts: &[usize]) -> usize {
        self.next_count(counts)
    }

    fn select_n_trash(&mut self, counts: &[usize]) -> usize {
        self.next_count(counts)
    }

    fn select_shuffle(&mut self, menu: &[Choice]) -> Choice {
        self.next_choice(menu)
    }
}
