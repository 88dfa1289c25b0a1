//! Single-rule strategies.

use serde::{Deserialize, Serialize};

use super::Strategy;
use crate::rules::{bacon_turn, is_swap};

/// Always roll the same number of dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlwaysRoll(pub u32);

/// Strategy that always rolls `n` dice.
#[must_use]
pub fn always_roll(n: u32) -> AlwaysRoll {
    AlwaysRoll(n)
}

impl Strategy for AlwaysRoll {
    fn num_rolls(&self, _score: u32, _opponent_score: u32) -> u32 {
        self.0
    }

    fn name(&self) -> String {
        format!("always_roll({})", self.0)
    }
}

/// Roll 0 when Free Bacon is worth at least `margin`, otherwise `num_rolls`.
#[must_use]
pub fn bacon_strategy(_score: u32, opponent_score: u32, margin: u32, num_rolls: u32) -> u32 {
    if bacon_turn(opponent_score) >= margin {
        0
    } else {
        num_rolls
    }
}

/// Roll 0 when Free Bacon lands on a swap that leaves us with the
/// opponent's larger score, otherwise `num_rolls`.
#[must_use]
pub fn swap_strategy(score: u32, opponent_score: u32, num_rolls: u32) -> u32 {
    let after_bacon = score.saturating_add(bacon_turn(opponent_score));
    if is_swap(after_bacon, opponent_score) && opponent_score > after_bacon {
        0
    } else {
        num_rolls
    }
}

/// [`bacon_strategy`] with a fixed margin and fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaconStrategy {
    /// Minimum Free Bacon value worth taking.
    pub margin: u32,
    /// Dice to roll otherwise.
    pub num_rolls: u32,
}

impl Default for BaconStrategy {
    fn default() -> Self {
        Self {
            margin: 8,
            num_rolls: 5,
        }
    }
}

impl BaconStrategy {
    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_num_rolls(mut self, num_rolls: u32) -> Self {
        self.num_rolls = num_rolls;
        self
    }
}

impl Strategy for BaconStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        bacon_strategy(score, opponent_score, self.margin, self.num_rolls)
    }

    fn name(&self) -> String {
        "bacon_strategy".to_string()
    }
}

/// [`swap_strategy`] with a fixed fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapStrategy {
    pub num_rolls: u32,
}

impl Default for SwapStrategy {
    fn default() -> Self {
        Self { num_rolls: 5 }
    }
}

impl Strategy for SwapStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        swap_strategy(score, opponent_score, self.num_rolls)
    }

    fn name(&self) -> String {
        "swap_strategy".to_string()
    }
}
