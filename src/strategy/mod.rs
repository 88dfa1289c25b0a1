//! Strategies: how many dice to roll given both scores.
//!
//! A strategy is a pure function of `(own score, opponent score)` returning
//! a roll count in `0..=10`. Built-in strategies are small config structs;
//! any `Fn(u32, u32) -> u32` closure works too:
//!
//! ```
//! use hog::strategy::{AlwaysRoll, Strategy};
//!
//! let cautious = |score: u32, _opponent: u32| if score > 90 { 1u32 } else { 4 };
//! assert_eq!(cautious.num_rolls(95, 0), 1);
//! assert_eq!(AlwaysRoll(5).num_rolls(99, 99), 5);
//! ```
//!
//! ## Built-ins
//!
//! - [`AlwaysRoll`]: fixed roll count
//! - [`BaconStrategy`]: Free Bacon when it pays at least a margin
//! - [`SwapStrategy`]: Free Bacon when it triggers a favourable Swine Swap
//! - [`hog_wild_strategy`], [`piggyswap_strategy`]: building blocks that
//!   chase Hog Wild for the opponent or a favourable swap
//! - [`StagedStrategy`]: score-band table composing the building blocks
//! - [`FinalStrategy`]: staged baseline refined by bacon and swap checks

mod basic;
mod seeking;
mod staged;

pub use basic::{always_roll, bacon_strategy, swap_strategy, AlwaysRoll, BaconStrategy, SwapStrategy};
pub use seeking::{hog_wild_strategy, piggyswap_strategy, PIGGYSWAP_CANDIDATES};
pub use staged::{FinalStrategy, Stage, StageRolls, StageTable, StagedStrategy};

/// Decides a roll count from the mover's point of view.
pub trait Strategy: Send + Sync {
    /// Number of dice to roll this turn, `0` meaning Free Bacon.
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32;

    /// Human-readable label for reports.
    fn name(&self) -> String {
        "custom".to_string()
    }
}

impl<F> Strategy for F
where
    F: Fn(u32, u32) -> u32 + Send + Sync,
{
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        self(score, opponent_score)
    }
}
