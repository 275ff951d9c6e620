//! Turn structure, game end and scoring.
//!
//! `Game` owns the state and the agents and drives the turn loop; card
//! effects are delegated to [`crate::effects`].

pub mod engine;
pub mod score;

pub use engine::Game;
pub use score::{GameResult, ScoreEntry, ScoreSheet};
