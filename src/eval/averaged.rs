//! Averaging repeated calls.
//!
//! The function being averaged is a closure: whatever arguments it needs
//! are captured once and reused on every call.

use super::EvalError;
use crate::core::MAX_ROLLS;
use crate::dice::Dice;
use crate::rules::roll_dice;

/// A function wrapped to return its mean over `num_samples` calls.
#[derive(Clone, Debug)]
pub struct Averaged<F> {
    f: F,
    num_samples: usize,
}

/// Wrap `f` so each call returns the mean of `num_samples` calls to it.
///
/// ```
/// use hog::dice::{Dice, TestDice};
/// use hog::eval::make_averaged;
///
/// let mut dice = TestDice::new([3, 1, 5, 6]).unwrap();
/// let mut averaged = make_averaged(|| dice.roll(), 1000).unwrap();
/// assert_eq!(averaged.call(), 3.75);
/// ```
pub fn make_averaged<F>(f: F, num_samples: usize) -> Result<Averaged<F>, EvalError> {
    if num_samples == 0 {
        return Err(EvalError::NoSamples);
    }
    Ok(Averaged { f, num_samples })
}

impl<F> Averaged<F> {
    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Mean of `num_samples` calls.
    pub fn call<T>(&mut self) -> f64
    where
        F: FnMut() -> T,
        T: Into<f64>,
    {
        let total: f64 = (0..self.num_samples)
            .map(|_| Into::<f64>::into((self.f)()))
            .sum();
        total / self.num_samples as f64
    }

    /// Mean of `num_samples` calls to a fallible function, stopping at the
    /// first error.
    pub fn try_call<T, E>(&mut self) -> Result<f64, E>
    where
        F: FnMut() -> Result<T, E>,
        T: Into<f64>,
    {
        let mut total = 0.0_f64;
        for _ in 0..self.num_samples {
            let value: f64 = (self.f)()?.into();
            total += value;
        }
        Ok(total / self.num_samples as f64)
    }
}

/// Mean of `num_samples` calls to `f`, evaluated immediately.
pub fn average<F, T>(f: F, num_samples: usize) -> Result<f64, EvalError>
where
    F: FnMut() -> T,
    T: Into<f64>,
{
    Ok(make_averaged(f, num_samples)?.call())
}

/// Roll count in `1..=10` with the highest average [`roll_dice`] score.
///
/// A later count must be strictly better to win, so ties favour fewer dice.
pub fn max_scoring_num_rolls<D: Dice + ?Sized>(
    dice: &mut D,
    num_samples: usize,
) -> Result<u32, EvalError> {
    let mut best_rolls = 1;
    let mut best_average = 0.0;

    for num_rolls in 1..=MAX_ROLLS {
        let average = make_averaged(|| roll_dice(num_rolls, &mut *dice), num_samples)?.try_call()?;
        if average > best_average {
            best_average = average;
            best_rolls = num_rolls;
        }
    }

    Ok(best_rolls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{FairDice, TestDice};
    use crate::rules::{take_turn, RuleError};

    fn dice(outcomes: &[u32]) -> TestDice {
        TestDice::new(outcomes.iter().copied()).unwrap()
    }

    #[test]
    fn test_averaged_dice() {
        let mut d = dice(&[3, 1, 5, 6]);
        let mut averaged = make_averaged(|| d.roll(), 1000).unwrap();
        assert_eq!(averaged.num_samples(), 1000);
        assert_eq!(averaged.call(), 3.75);
    }

    #[test]
    fn test_averaged_roll_dice() {
        // 3, 1 pigs out; 5, 6 scores 11.
        let mut d = dice(&[3, 1, 5, 6]);
        let average = make_averaged(|| roll_dice(2, &mut d), 1000)
            .unwrap()
            .try_call()
            .unwrap();
        assert_eq!(average, 5.5);
    }

    #[test]
    fn test_averaged_take_turn_applies_prime_boost() {
        // 11 is boosted to 13.
        let mut d = dice(&[3, 1, 5, 6]);
        let average = make_averaged(|| take_turn(2, 0, &mut d), 1000)
            .unwrap()
            .try_call()
            .unwrap();
        assert_eq!(average, 6.5);
    }

    #[test]
    fn test_averaged_propagates_errors() {
        let mut d = dice(&[4]);
        let result = make_averaged(|| take_turn(12, 0, &mut d), 10)
            .unwrap()
            .try_call();
        assert!(matches!(result, Err(RuleError::TooManyRolls { .. })));
    }

    #[test]
    fn test_average_direct() {
        let mut d = dice(&[2, 4]);
        assert_eq!(average(|| d.roll(), 10).unwrap(), 3.0);
        assert!(matches!(average(|| 1u32, 0), Err(EvalError::NoSamples)));
    }

    #[test]
    fn test_zero_samples_rejected() {
        assert!(matches!(
            make_averaged(|| 1u32, 0),
            Err(EvalError::NoSamples)
        ));
    }

    #[test]
    fn test_max_scoring_constant_dice() {
        assert_eq!(max_scoring_num_rolls(&mut dice(&[3]), 1000).unwrap(), 10);
    }

    #[test]
    fn test_max_scoring_always_pigs_out() {
        // Every count averages 0, so the first one stands.
        assert_eq!(max_scoring_num_rolls(&mut dice(&[1]), 100).unwrap(), 1);
    }

    #[test]
    fn test_max_scoring_fair_dice() {
        let six = max_scoring_num_rolls(&mut FairDice::six_sided(1), 1000).unwrap();
        assert!((4..=8).contains(&six), "six-sided best was {six}");

        let four = max_scoring_num_rolls(&mut FairDice::four_sided(1), 1000).unwrap();
        assert!((2..=6).contains(&four), "four-sided best was {four}");
    }
}
