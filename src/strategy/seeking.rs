//! Strategies that steer the score toward a rule trigger.

use crate::core::HOG_WILD_MODULUS;
use crate::rules::{bacon_turn, is_swap};

/// Roll counts tried, in order, when fishing for a Swine Swap.
pub const PIGGYSWAP_CANDIDATES: [u32; 5] = [6, 7, 8, 9, 10];

/// Roll 0 if Free Bacon leaves the combined score on a multiple of 7,
/// handing the opponent four-sided dice. Otherwise roll `num_rolls`.
#[must_use]
pub fn hog_wild_strategy(score: u32, opponent_score: u32, num_rolls: u32) -> u32 {
    let combined =
        u64::from(score) + u64::from(bacon_turn(opponent_score)) + u64::from(opponent_score);
    if combined % u64::from(HOG_WILD_MODULUS) == 0 {
        0
    } else {
        num_rolls
    }
}

/// Pick a roll count that, if it Pigs Out, feeds the opponent exactly
/// enough points for a Swine Swap.
///
/// Only sensible while trailing. The first candidate in
/// [`PIGGYSWAP_CANDIDATES`] that works wins; without one, `num_rolls`.
#[must_use]
pub fn piggyswap_strategy(score: u32, opponent_score: u32, num_rolls: u32) -> u32 {
    PIGGYSWAP_CANDIDATES
        .into_iter()
        .find(|&k| {
            opponent_score
                .checked_add(k)
                .is_some_and(|fed| is_swap(score, fed))
        })
        .unwrap_or(num_rolls)
}
