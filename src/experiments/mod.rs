//! Strategy experiments.
//!
//! Callers choose which experiments to run by passing [`Experiment`]
//! values; each produces an [`ExperimentReport`] with a printable summary.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::GameRng;
use crate::dice::{DiceKind, FairDice};
use crate::eval::{average_win_rate, max_scoring_num_rolls, EvalConfig, EvalError};
use crate::strategy::{always_roll, BaconStrategy, FinalStrategy, Strategy, SwapStrategy};

/// Baseline every win rate is measured against.
pub const BASELINE_ROLLS: u32 = 5;

/// One experiment in the battery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Experiment {
    /// Best roll count for six- and four-sided dice.
    MaxScoringNumRolls,
    /// Win rate of always rolling `n`.
    AlwaysRoll(u32),
    /// Win rate of the default bacon strategy.
    Bacon,
    /// Win rate of the default swap strategy.
    Swap,
    /// Win rate of the final strategy.
    Final,
}

impl Experiment {
    /// The battery run when nothing specific is requested.
    #[must_use]
    pub fn defaults() -> Vec<Experiment> {
        vec![Experiment::Final]
    }

    /// Every experiment.
    #[must_use]
    pub fn all() -> Vec<Experiment> {
        vec![
            Experiment::MaxScoringNumRolls,
            Experiment::AlwaysRoll(8),
            Experiment::Bacon,
            Experiment::Swap,
            Experiment::Final,
        ]
    }

    /// Run this experiment.
    pub fn run(self, config: &EvalConfig) -> Result<ExperimentReport, EvalError> {
        let report = match self {
            Experiment::MaxScoringNumRolls => {
                let root = GameRng::new(config.seed);
                let mut six =
                    FairDice::for_kind(DiceKind::SixSided, root.for_context("six_sided"));
                let mut four =
                    FairDice::for_kind(DiceKind::FourSided, root.for_context("four_sided"));
                ExperimentReport::MaxScoringNumRolls {
                    six_sided: max_scoring_num_rolls(&mut six, config.num_samples)?,
                    four_sided: max_scoring_num_rolls(&mut four, config.num_samples)?,
                }
            }
            Experiment::AlwaysRoll(n) => win_rate_report(&always_roll(n), config)?,
            Experiment::Bacon => win_rate_report(&BaconStrategy::default(), config)?,
            Experiment::Swap => win_rate_report(&SwapStrategy::default(), config)?,
            Experiment::Final => win_rate_report(&FinalStrategy::default(), config)?,
        };

        info!(experiment = ?self, %report, "experiment finished");
        Ok(report)
    }
}

fn win_rate_report(strategy: &dyn Strategy, config: &EvalConfig) -> Result<ExperimentReport, EvalError> {
    let rate = average_win_rate(strategy, &always_roll(BASELINE_ROLLS), config)?;
    Ok(ExperimentReport::WinRate {
        strategy: strategy.name(),
        rate,
    })
}

/// Result of one experiment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ExperimentReport {
    MaxScoringNumRolls { six_sided: u32, four_sided: u32 },
    WinRate { strategy: String, rate: f64 },
}

impl std::fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperimentReport::MaxScoringNumRolls {
                six_sided,
                four_sided,
            } => write!(
                f,
                "Max scoring num rolls for six-sided dice: {six_sided}\n\
                 Max scoring num rolls for four-sided dice: {four_sided}"
            ),
            ExperimentReport::WinRate { strategy, rate } => {
                write!(f, "{strategy} win rate: {rate}")
            }
        }
    }
}

/// Run `experiments` in order, stopping at the first failure.
pub fn run_experiments(
    experiments: &[Experiment],
    config: &EvalConfig,
) -> Result<Vec<ExperimentReport>, EvalError> {
    experiments.iter().map(|e| e.run(config)).collect()
}
