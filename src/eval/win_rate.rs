//! Win-rate estimation over many simulated games.

use rayon::prelude::*;
use tracing::{debug, info};

use super::{EvalConfig, EvalError};
use crate::core::{GameConfig, GameRng, PlayerId};
use crate::dice::{DiceRack, StandardRack};
use crate::game::play;
use crate::rules::RuleError;
use crate::strategy::Strategy;

/// Which player wins a full default game between `strategy0` and `strategy1`.
pub fn winner<R: DiceRack + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    rack: &mut R,
) -> Result<PlayerId, RuleError> {
    Ok(play(strategy0, strategy1, rack, &GameConfig::default())?.winner())
}

/// Fraction of games `strategy` wins against `baseline` from `seat`.
///
/// Trial `i` rolls with dice seeded from `config.seed`, the seat and `i`,
/// so the estimate is reproducible and the parallel path matches the
/// sequential one exactly.
pub fn win_rate(
    strategy: &dyn Strategy,
    baseline: &dyn Strategy,
    seat: PlayerId,
    config: &EvalConfig,
) -> Result<f64, EvalError> {
    if config.num_samples == 0 {
        return Err(EvalError::NoSamples);
    }

    let context = if seat == PlayerId::ZERO {
        "player0"
    } else {
        "player1"
    };
    let root = GameRng::new(config.seed).for_context(context);
    let (strategy0, strategy1) = if seat == PlayerId::ZERO {
        (strategy, baseline)
    } else {
        (baseline, strategy)
    };

    let trial = |i: usize| -> Result<bool, RuleError> {
        let mut rack = StandardRack::from_rng(root.for_trial(i as u64));
        Ok(winner(strategy0, strategy1, &mut rack)? == seat)
    };

    let wins: Vec<bool> = if config.parallel {
        (0..config.num_samples)
            .into_par_iter()
            .map(trial)
            .collect::<Result<Vec<bool>, RuleError>>()?
    } else {
        (0..config.num_samples)
            .map(trial)
            .collect::<Result<Vec<bool>, RuleError>>()?
    };

    let won = wins.iter().filter(|&&w| w).count();
    let rate = won as f64 / config.num_samples as f64;

    debug!(
        strategy = %strategy.name(),
        baseline = %baseline.name(),
        seat = seat.index(),
        won,
        samples = config.num_samples,
        rate,
        "win rate estimated"
    );

    Ok(rate)
}

/// Win rate of `strategy` against `baseline`, averaged over moving first
/// and moving second.
pub fn average_win_rate(
    strategy: &dyn Strategy,
    baseline: &dyn Strategy,
    config: &EvalConfig,
) -> Result<f64, EvalError> {
    let as_player0 = win_rate(strategy, baseline, PlayerId::ZERO, config)?;
    let as_player1 = win_rate(strategy, baseline, PlayerId::ONE, config)?;
    let rate = (as_player0 + as_player1) / 2.0;

    info!(
        strategy = %strategy.name(),
        baseline = %baseline.name(),
        as_player0,
        as_player1,
        rate,
        "average win rate"
    );

    Ok(rate)
}
