//! Game outcomes and per-turn records.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Scores};
use crate::dice::DiceKind;

/// Final result of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Final totals, player 0 first.
    pub scores: Scores,
    /// Turns played.
    pub turns: u32,
}

impl GameOutcome {
    /// Player 0 wins only with a strictly higher score; ties go to player 1.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        let (score0, score1) = self.scores.pair();
        if score0 > score1 {
            PlayerId::ZERO
        } else {
            PlayerId::ONE
        }
    }
}

/// What happened on a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub dice: DiceKind,
    pub num_rolls: u32,
    /// Turn score after Hogtimus Prime.
    pub turn_score: u32,
    /// The turn scored 0 and `num_rolls` went to the opponent.
    pub boar: bool,
    /// Swine Swap fired after the turn.
    pub swapped: bool,
    /// Totals after the turn, swap applied.
    pub scores: Scores,
}

/// Ordered turn history for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    turns: Vec<TurnRecord>,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: TurnRecord) {
        self.turns.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnRecord> {
        self.turns.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TurnRecord> {
        self.turns.last()
    }

    /// Number of turns where the Boar rule fed the opponent.
    #[must_use]
    pub fn boar_count(&self) -> usize {
        self.turns.iter().filter(|t| t.boar).count()
    }
}
