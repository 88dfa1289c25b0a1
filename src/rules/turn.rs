//! Turn resolution: Pig Out, Free Bacon and Hogtimus Prime.

use thiserror::Error;

use crate::core::{GOAL_SCORE, MAX_ROLLS};
use crate::dice::Dice;

/// Contract violations in turn resolution.
///
/// These are bugs in the calling strategy or harness, not game events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("must roll at least once")]
    NoRolls,
    #[error("cannot roll more than {max} dice, got {num_rolls}")]
    TooManyRolls { num_rolls: u32, max: u32 },
    #[error("opponent score {score} has reached the goal {goal}, the game should be over")]
    GameOver { score: u32, goal: u32 },
    #[error("score does not fit in a u32")]
    ScoreOverflow,
}

/// Roll `dice` exactly `num_rolls` times.
///
/// Returns the sum of the outcomes unless any outcome is 1 (Pig Out), in
/// which case the turn scores 0. Every die is rolled either way. A sum
/// past `u32::MAX` without a Pig Out is [`RuleError::ScoreOverflow`].
pub fn roll_dice<D: Dice + ?Sized>(num_rolls: u32, dice: &mut D) -> Result<u32, RuleError> {
    if num_rolls == 0 {
        return Err(RuleError::NoRolls);
    }

    let mut total = Some(0u32);
    let mut pigged_out = false;
    for _ in 0..num_rolls {
        let outcome = dice.roll();
        pigged_out |= outcome == 1;
        total = total.and_then(|t| t.checked_add(outcome));
    }

    if pigged_out {
        Ok(0)
    } else {
        total.ok_or(RuleError::ScoreOverflow)
    }
}

/// Free Bacon: one more than the largest of the opponent's last two digits.
#[must_use]
pub fn free_bacon(opponent_score: u32) -> u32 {
    let ones = opponent_score % 10;
    let tens = (opponent_score / 10) % 10;
    1 + ones.max(tens)
}

#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Smallest prime strictly greater than `n`, or `None` past the largest
/// `u32` prime.
#[must_use]
pub fn next_prime(n: u32) -> Option<u32> {
    let mut candidate = n.checked_add(1)?;
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}

/// Hogtimus Prime: a prime turn score is boosted to the next prime.
///
/// `None` if the boosted score would not fit in a `u32`.
#[must_use]
pub fn hogtimus_prime(turn_score: u32) -> Option<u32> {
    if is_prime(turn_score) {
        next_prime(turn_score)
    } else {
        Some(turn_score)
    }
}

/// What a zero-dice turn is worth against `opponent_score`, boost included.
#[must_use]
pub fn bacon_turn(opponent_score: u32) -> u32 {
    let bacon = free_bacon(opponent_score);
    // Free Bacon is at most 10, so the boost always fits.
    hogtimus_prime(bacon).unwrap_or(bacon)
}

/// Resolve one turn of `num_rolls` dice, which may be 0 (Free Bacon).
///
/// The opponent must still be below the default goal of 100.
pub fn take_turn<D: Dice + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    dice: &mut D,
) -> Result<u32, RuleError> {
    resolve_turn(num_rolls, opponent_score, GOAL_SCORE, dice)
}

/// [`take_turn`] against an explicit goal.
pub fn resolve_turn<D: Dice + ?Sized>(
    num_rolls: u32,
    opponent_score: u32,
    goal: u32,
    dice: &mut D,
) -> Result<u32, RuleError> {
    if num_rolls > MAX_ROLLS {
        return Err(RuleError::TooManyRolls {
            num_rolls,
            max: MAX_ROLLS,
        });
    }
    if opponent_score >= goal {
        return Err(RuleError::GameOver {
            score: opponent_score,
            goal,
        });
    }

    let turn_score = if num_rolls == 0 {
        free_bacon(opponent_score)
    } else {
        roll_dice(num_rolls, dice)?
    };

    hogtimus_prime(turn_score).ok_or(RuleError::ScoreOverflow)
}
