//! Monte Carlo evaluation.
//!
//! - [`make_averaged`], [`average`]: mean of repeated calls to any closure
//! - [`max_scoring_num_rolls`]: roll count with the best expected turn score
//! - [`winner`], [`win_rate`], [`average_win_rate`]: strategy strength
//!   measured over many seeded games, optionally in parallel
//!
//! ## Usage
//!
//! ```
//! use hog::eval::{average_win_rate, EvalConfig};
//! use hog::strategy::{always_roll, BaconStrategy};
//!
//! let config = EvalConfig::new().with_samples(100).with_seed(1);
//! let rate = average_win_rate(&BaconStrategy::default(), &always_roll(5), &config).unwrap();
//! assert!((0.0..=1.0).contains(&rate));
//! ```

mod averaged;
mod config;
mod win_rate;

use thiserror::Error;

use crate::rules::RuleError;

pub use averaged::{average, make_averaged, max_scoring_num_rolls, Averaged};
pub use config::EvalConfig;
pub use win_rate::{average_win_rate, win_rate, winner};

/// Evaluation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("at least one sample is required")]
    NoSamples,
    #[error("rule violation during evaluation: {0}")]
    Rule(#[from] RuleError),
}
