//! Final scores.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Outcome of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tie for the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// One seat's final tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: PlayerId,
    pub name: String,
    pub victory_points: i32,
}

/// Victory points per player, in seat order.
///
/// ```
/// use dominion_engine::core::PlayerId;
/// use dominion_engine::rules::ScoreSheet;
///
/// let mut sheet = ScoreSheet::new();
/// sheet.push(PlayerId::new(0), "Ada", 12);
/// sheet.push(PlayerId::new(1), "Bo", 9);
///
/// assert_eq!(sheet.get("Ada"), Some(12));
/// assert_eq!(sheet.winners(), vec!["Ada"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    entries: Vec<ScoreEntry>,
}

impl ScoreSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, player: PlayerId, name: impl Into<String>, victory_points: i32) {
        self.entries.push(ScoreEntry {
            player,
            name: name.into(),
            victory_points,
        });
    }

    /// Score of the first player called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.victory_points)
    }

    /// Score of a seat.
    #[must_use]
    pub fn of(&self, player: PlayerId) -> Option<i32> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.victory_points)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn top_entries(&self) -> impl Iterator<Item = &ScoreEntry> {
        let best = self.entries.iter().map(|e| e.victory_points).max();
        self.entries
            .iter()
            .filter(move |e| Some(e.victory_points) == best)
    }

    /// Names of everyone holding the top score.
    #[must_use]
    pub fn winners(&self) -> Vec<&str> {
        self.top_entries().map(|e| e.name.as_str()).collect()
    }

    /// Winner or tied winners. `None` for an empty sheet.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let mut top: Vec<PlayerId> = self.top_entries().map(|e| e.player).collect();
        match top.len() {
            0 => None,
            1 => top.pop().map(GameResult::Winner),
            _ => Some(GameResult::Winners(top)),
        }
    }
}

impl std::fmt::Display for ScoreSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", entry.name, entry.victory_points)?;
        }
        Ok(())
    }
}
