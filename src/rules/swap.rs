//! Rules that look at both scores: Hog Wild and Swine Swap.

use crate::core::HOG_WILD_MODULUS;
use crate::dice::DiceKind;

/// True when the combined score is a multiple of 7, 0 included.
#[must_use]
pub fn is_hog_wild(score: u32, opponent_score: u32) -> bool {
    (u64::from(score) + u64::from(opponent_score)) % u64::from(HOG_WILD_MODULUS) == 0
}

/// Hog Wild: four-sided dice when the combined score is a multiple of 7.
#[must_use]
pub fn select_dice(score: u32, opponent_score: u32) -> DiceKind {
    if is_hog_wild(score, opponent_score) {
        DiceKind::FourSided
    } else {
        DiceKind::SixSided
    }
}

/// Swine Swap trigger.
///
/// True when the last two digits of `score0`, reversed, equal the last two
/// digits of `score1`, such as 19 and 91. A single-digit `score0` reverses
/// with a leading zero, so 9 matches 90.
#[must_use]
pub fn is_swap(score0: u32, score1: u32) -> bool {
    let reversed = (score0 % 10) * 10 + (score0 / 10) % 10;
    reversed == score1 % 100
}
