//! Full-game simulation.
//!
//! ```
//! use hog::core::GameConfig;
//! use hog::dice::StandardRack;
//! use hog::game::play;
//! use hog::strategy::{always_roll, FinalStrategy};
//!
//! let mut rack = StandardRack::new(7);
//! let outcome = play(&FinalStrategy::default(), &always_roll(5), &mut rack, &GameConfig::default())
//!     .unwrap();
//!
//! let (score0, score1) = outcome.scores.pair();
//! assert!(score0 >= 100 || score1 >= 100);
//! ```

mod play;
mod record;

pub use play::{play, play_logged, Game, GamePhase};
pub use record::{GameLog, GameOutcome, TurnRecord};
