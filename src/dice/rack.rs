//! Dice racks: which physical die a turn is rolled with.

use serde::{Deserialize, Serialize};

use super::source::{Dice, FairDice};
use crate::core::GameRng;

/// Which die the current turn uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiceKind {
    /// Hog Wild is in effect.
    FourSided,
    /// The usual die.
    SixSided,
}

impl DiceKind {
    /// Number of faces on this die.
    #[must_use]
    pub const fn sides(self) -> u32 {
        match self {
            DiceKind::FourSided => 4,
            DiceKind::SixSided => 6,
        }
    }
}

impl std::fmt::Display for DiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Hands out the die for a given [`DiceKind`].
pub trait DiceRack {
    fn dice(&mut self, kind: DiceKind) -> &mut dyn Dice;
}

impl<R: DiceRack + ?Sized> DiceRack for &mut R {
    fn dice(&mut self, kind: DiceKind) -> &mut dyn Dice {
        (**self).dice(kind)
    }
}

/// A fair four-sided and a fair six-sided die on independent streams.
#[derive(Clone, Debug)]
pub struct StandardRack {
    four_sided: FairDice,
    six_sided: FairDice,
}

impl StandardRack {
    /// Build both dice from one root seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Build both dice by forking `root`.
    #[must_use]
    pub fn from_rng(mut root: GameRng) -> Self {
        Self {
            four_sided: FairDice::for_kind(DiceKind::FourSided, root.fork()),
            six_sided: FairDice::for_kind(DiceKind::SixSided, root.fork()),
        }
    }
}

impl DiceRack for StandardRack {
    fn dice(&mut self, kind: DiceKind) -> &mut dyn Dice {
        match kind {
            DiceKind::FourSided => &mut self.four_sided,
            DiceKind::SixSided => &mut self.six_sided,
        }
    }
}

/// Uses the same die whatever kind is asked for.
///
/// Substituting a [`TestDice`](super::TestDice) this way makes a whole game
/// deterministic.
#[derive(Clone, Debug)]
pub struct FixedRack<D>(pub D);

impl<D: Dice> DiceRack for FixedRack<D> {
    fn dice(&mut self, _kind: DiceKind) -> &mut dyn Dice {
        &mut self.0
    }
}
