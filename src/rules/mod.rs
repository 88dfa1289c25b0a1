//! The rules of Hog.
//!
//! - **Pig Out**: any 1 rolled makes the turn worth 0
//! - **Free Bacon**: rolling zero dice scores `1 + max` of the opponent's last two digits
//! - **Hogtimus Prime**: a prime turn score becomes the next prime
//! - **Hog Wild**: four-sided dice when the combined score is a multiple of 7
//! - **Swine Swap**: scores exchange when their last two digits mirror each other
//!
//! The Boar rule (a zero turn credits the roll count to the opponent) is
//! applied by the game loop, since it moves points between players.

pub mod swap;
pub mod turn;

pub use swap::{is_hog_wild, is_swap, select_dice};
pub use turn::{
    bacon_turn, free_bacon, hogtimus_prime, is_prime, next_prime, resolve_turn, roll_dice,
    take_turn, RuleError,
};
