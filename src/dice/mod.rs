//! Dice sources.
//!
//! A die is anything that yields one positive outcome per call:
//!
//! - [`FairDice`]: uniform over `1..=sides`, backed by a seeded [`GameRng`](crate::core::GameRng)
//! - [`TestDice`]: replays a literal outcome sequence, cycling past the end
//!
//! The game loop never owns a die directly. It asks a [`DiceRack`] for the
//! die matching the current [`DiceKind`], which keeps test substitution
//! trivial: a [`FixedRack`] hands out the same scripted die for both kinds.

mod rack;
mod source;

pub use rack::{DiceKind, DiceRack, FixedRack, StandardRack};
pub use source::{Dice, DiceError, FairDice, TestDice};
