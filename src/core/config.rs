//! Rule constants and game configuration.
//!
//! `GameConfig` is passed explicitly to the game loop. There are no
//! module-level switches: every knob a caller can turn lives here.

use serde::{Deserialize, Serialize};

use super::{PlayerId, Scores};

/// The goal of Hog is to score 100 points.
pub const GOAL_SCORE: u32 = 100;

/// Most dice a player may roll in one turn.
pub const MAX_ROLLS: u32 = 10;

/// Combined scores divisible by this trigger Hog Wild.
pub const HOG_WILD_MODULUS: u32 = 7;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score that ends the game once either player reaches it.
    pub goal: u32,

    /// Player who takes the first turn.
    pub first_player: PlayerId,

    /// Starting totals, in seat order.
    pub initial_scores: Scores,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            goal: GOAL_SCORE,
            first_player: PlayerId::ZERO,
            initial_scores: Scores::default(),
        }
    }
}

impl GameConfig {
    /// Create a config with the standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the goal score.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    /// Set who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: PlayerId) -> Self {
        self.first_player = player;
        self
    }

    /// Start from the given totals instead of 0-0.
    #[must_use]
    pub fn with_scores(mut self, score0: u32, score1: u32) -> Self {
        self.initial_scores = Scores::new(score0, score1);
        self
    }
}
