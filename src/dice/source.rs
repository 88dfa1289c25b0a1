//! Fair and scripted dice.

use thiserror::Error;

use super::rack::DiceKind;
use crate::core::GameRng;

/// Errors raised while building a die.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("a die needs at least one side")]
    NoSides,
    #[error("test dice need at least one outcome")]
    EmptySequence,
    #[error("dice outcomes must be positive, got {0}")]
    NonPositiveOutcome(u32),
}

/// A source of die outcomes.
pub trait Dice {
    /// Roll once.
    fn roll(&mut self) -> u32;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

impl<D: Dice + ?Sized> Dice for Box<D> {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

/// Uniform N-sided die.
#[derive(Clone, Debug)]
pub struct FairDice {
    sides: u32,
    rng: GameRng,
}

impl FairDice {
    /// Create a die with `sides` faces seeded from `seed`.
    pub fn new(sides: u32, seed: u64) -> Result<Self, DiceError> {
        Self::from_rng(sides, GameRng::new(seed))
    }

    /// Create a die that draws from an existing stream.
    pub fn from_rng(sides: u32, rng: GameRng) -> Result<Self, DiceError> {
        if sides == 0 {
            return Err(DiceError::NoSides);
        }
        Ok(Self { sides, rng })
    }

    /// The die for `kind`, drawing from `rng`.
    #[must_use]
    pub fn for_kind(kind: DiceKind, rng: GameRng) -> Self {
        Self {
            sides: kind.sides(),
            rng,
        }
    }

    /// Four-sided die (used under Hog Wild).
    #[must_use]
    pub fn four_sided(seed: u64) -> Self {
        Self::for_kind(DiceKind::FourSided, GameRng::new(seed))
    }

    /// Standard six-sided die.
    #[must_use]
    pub fn six_sided(seed: u64) -> Self {
        Self::for_kind(DiceKind::SixSided, GameRng::new(seed))
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl Dice for FairDice {
    fn roll(&mut self) -> u32 {
        self.rng.roll_die(self.sides)
    }
}

/// Scripted die for tests and reproducible experiments.
///
/// Returns the configured outcomes in order, then starts over from the
/// first one. It never runs dry, so averaging many calls over a short
/// sequence is well defined.
///
/// ```
/// use hog::dice::{Dice, TestDice};
///
/// let mut dice = TestDice::new([4, 1, 2]).unwrap();
/// let rolls: Vec<u32> = (0..5).map(|_| dice.roll()).collect();
/// assert_eq!(rolls, vec![4, 1, 2, 4, 1]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestDice {
    outcomes: Vec<u32>,
    next: usize,
}

impl TestDice {
    /// Build from a literal outcome sequence.
    pub fn new(outcomes: impl IntoIterator<Item = u32>) -> Result<Self, DiceError> {
        let outcomes: Vec<u32> = outcomes.into_iter().collect();
        if outcomes.is_empty() {
            return Err(DiceError::EmptySequence);
        }
        if outcomes.contains(&0) {
            return Err(DiceError::NonPositiveOutcome(0));
        }
        Ok(Self { outcomes, next: 0 })
    }

    /// Outcomes consumed so far in the current cycle.
    #[must_use]
    pub fn position(&self) -> usize {
        self.next
    }
}

impl Dice for TestDice {
    fn roll(&mut self) -> u32 {
        let outcome = self.outcomes[self.next];
        self.next = (self.next + 1) % self.outcomes.len();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fair_dice_ranges() {
        let mut four = FairDice::four_sided(1);
        let mut six = FairDice::six_sided(1);

        for _ in 0..200 {
            assert!((1..=4).contains(&four.roll()));
            assert!((1..=6).contains(&six.roll()));
        }
        assert_eq!(four.sides(), 4);
        assert_eq!(six.sides(), 6);
    }

    #[test]
    fn test_fair_dice_deterministic() {
        let mut a = FairDice::six_sided(99);
        let mut b = FairDice::six_sided(99);
        for _ in 0..50 {
            assert_eq!(a.roll(), b.roll());
        }
    }

    #[test]
    fn test_fair_dice_for_kind_uses_given_stream() {
        let mut dice = FairDice::for_kind(DiceKind::FourSided, GameRng::new(8).for_trial(2));
        let mut rng = GameRng::new(8).for_trial(2);

        assert_eq!(dice.sides(), 4);
        for _ in 0..50 {
            assert_eq!(dice.roll(), rng.roll_die(4));
        }
    }

    #[test]
    fn test_fair_dice_rejects_zero_sides() {
        assert_eq!(FairDice::new(0, 1).unwrap_err(), DiceError::NoSides);
        assert_eq!(FairDice::new(8, 1).unwrap().sides(), 8);
    }

    #[test]
    fn test_test_dice_cycles_past_end() {
        let mut dice = TestDice::new([3, 1, 5, 6]).unwrap();
        let rolls: Vec<u32> = (0..10).map(|_| dice.roll()).collect();
        assert_eq!(rolls, vec![3, 1, 5, 6, 3, 1, 5, 6, 3, 1]);
        assert_eq!(dice.position(), 2);
    }

    #[test]
    fn test_test_dice_single_outcome() {
        let mut dice = TestDice::new([3]).unwrap();
        for _ in 0..20 {
            assert_eq!(dice.roll(), 3);
        }
    }

    #[test]
    fn test_test_dice_rejects_bad_sequences() {
        assert_eq!(
            TestDice::new(Vec::<u32>::new()).unwrap_err(),
            DiceError::EmptySequence
        );
        assert_eq!(
            TestDice::new([2, 0]).unwrap_err(),
            DiceError::NonPositiveOutcome(0)
        );
    }

    #[test]
    fn test_dice_through_references() {
        fn first<D: Dice>(mut dice: D) -> u32 {
            dice.roll()
        }

        let mut dice = TestDice::new([2, 4]).unwrap();
        assert_eq!(first(&mut dice), 2);

        let boxed: Box<dyn Dice> = Box::new(dice);
        assert_eq!(first(boxed), 4);
    }
}
