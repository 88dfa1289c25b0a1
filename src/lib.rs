//! # hog
//!
//! Rules engine, strategies and Monte Carlo evaluation for Hog, a
//! two-player dice game played to 100 points.
//!
//! ## Design Principles
//!
//! 1. **Explicit capabilities**: dice and strategies are passed in, never
//!    looked up from shared defaults. A scripted die makes any game
//!    reproducible.
//!
//! 2. **Pure decisions**: strategies are stateless functions of
//!    `(own score, opponent score)`.
//!
//! 3. **Contract violations are errors**: an out-of-range roll count or a
//!    turn taken after the game ended returns a [`RuleError`].
//!
//! ## Modules
//!
//! - `core`: players, scores, RNG, rule constants, game configuration
//! - `dice`: fair and scripted dice, dice racks
//! - `rules`: turn resolution, Hog Wild, Swine Swap
//! - `game`: the game loop and turn log
//! - `strategy`: the `Strategy` trait and built-in strategies
//! - `eval`: averaging, best roll count, win rates
//! - `experiments`: the experiment battery behind the `hog` binary

pub mod core;
pub mod dice;
pub mod eval;
pub mod experiments;
pub mod game;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, PlayerId, Scores, GOAL_SCORE, MAX_ROLLS};

pub use crate::dice::{Dice, DiceKind, DiceRack, FairDice, FixedRack, StandardRack, TestDice};

pub use crate::rules::{is_swap, roll_dice, select_dice, take_turn, RuleError};

pub use crate::game::{play, play_logged, Game, GameLog, GameOutcome, GamePhase, TurnRecord};

pub use crate::strategy::{
    always_roll, AlwaysRoll, BaconStrategy, FinalStrategy, StageTable, StagedStrategy, Strategy,
    SwapStrategy,
};

pub use crate::eval::{average_win_rate, make_averaged, max_scoring_num_rolls, EvalConfig, EvalError};

pub use crate::experiments::{run_experiments, Experiment, ExperimentReport};
