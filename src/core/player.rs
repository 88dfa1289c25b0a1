//! Player identification and per-player scores.
//!
//! ## PlayerId
//!
//! Hog is strictly a two-player game: `PlayerId::ZERO` moves first by
//! default, `PlayerId::ONE` second.
//!
//! ## Scores
//!
//! Both totals stored side by side and indexable by `PlayerId`. Output
//! ordering is always (player 0, player 1), regardless of who moved last.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier, 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first in a default game.
    pub const ZERO: PlayerId = PlayerId(0);
    /// The player who moves second in a default game.
    pub const ONE: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opponent of this player.
    ///
    /// ```
    /// use hog::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ZERO.other(), PlayerId::ONE);
    /// assert_eq!(PlayerId::ONE.other(), PlayerId::ZERO);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Score totals for both players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores([u32; 2]);

impl Scores {
    /// Create scores from player 0's and player 1's totals.
    #[must_use]
    pub const fn new(score0: u32, score1: u32) -> Self {
        Self([score0, score1])
    }

    /// Scores as a `(player0, player1)` tuple.
    #[must_use]
    pub const fn pair(self) -> (u32, u32) {
        (self.0[0], self.0[1])
    }

    /// `(own, opponent)` from `player`'s point of view.
    #[must_use]
    pub fn perspective(self, player: PlayerId) -> (u32, u32) {
        (self[player], self[player.other()])
    }

    /// Exchange both totals (Swine Swap).
    pub fn swap(&mut self) {
        self.0.swap(0, 1);
    }

    /// True once either total has reached `goal`.
    #[must_use]
    pub fn reached(self, goal: u32) -> bool {
        self.0.iter().any(|&s| s >= goal)
    }
}

impl From<(u32, u32)> for Scores {
    fn from((score0, score1): (u32, u32)) -> Self {
        Self::new(score0, score1)
    }
}

impl Index<PlayerId> for Scores {
    type Output = u32;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.0[player.index()]
    }
}

impl IndexMut<PlayerId> for Scores {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.0[player.index()]
    }
}
