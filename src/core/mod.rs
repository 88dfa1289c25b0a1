//! Core types: players, scores, RNG, rule constants and configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, GOAL_SCORE, HOG_WILD_MODULUS, MAX_ROLLS};
pub use player::{PlayerId, Scores};
pub use rng::GameRng;
