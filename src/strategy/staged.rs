//! Score-band strategy and the final composite built on top of it.
//!
//! The game is split into stages by the mover's own score. Early stages
//! take more risk; later ones roll fewer dice. Within a stage the choice
//! depends on whether the mover leads or trails by at least `margin`.
//! The table is plain data, so experiments can tune it without code.

use serde::{Deserialize, Serialize};

use super::basic::bacon_strategy;
use super::seeking::{hog_wild_strategy, piggyswap_strategy};
use super::Strategy;
use crate::rules::is_hog_wild;

/// Base roll counts for one stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRolls {
    /// Ahead by at least the margin.
    pub leading: u32,
    /// Behind by at least the margin.
    pub trailing: u32,
    /// Within the margin either way.
    pub even: u32,
}

impl StageRolls {
    #[must_use]
    pub const fn new(leading: u32, trailing: u32, even: u32) -> Self {
        Self {
            leading,
            trailing,
            even,
        }
    }
}

/// A stage covering own scores below `below`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub below: u32,
    pub rolls: StageRolls,
}

/// Tunable policy table for [`StagedStrategy`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTable {
    /// Lead (or deficit) that counts as leading (or trailing).
    pub margin: u32,

    /// Rolls when the combined score is 0 or a multiple of 7.
    pub hog_wild_rolls: u32,

    /// Bounded stages in ascending `below` order.
    pub stages: Vec<Stage>,

    /// Rolls once the own score is past every stage.
    pub endgame: StageRolls,
}

impl Default for StageTable {
    fn default() -> Self {
        Self {
            margin: 10,
            hog_wild_rolls: 4,
            stages: vec![
                Stage {
                    below: 25,
                    rolls: StageRolls::new(6, 5, 4),
                },
                Stage {
                    below: 45,
                    rolls: StageRolls::new(4, 5, 3),
                },
                Stage {
                    below: 70,
                    rolls: StageRolls::new(3, 4, 2),
                },
            ],
            endgame: StageRolls::new(2, 3, 1),
        }
    }
}

impl StageTable {
    /// Roll counts for the stage containing `score`.
    #[must_use]
    pub fn rolls_for(&self, score: u32) -> StageRolls {
        self.stages
            .iter()
            .find(|stage| score < stage.below)
            .map_or(self.endgame, |stage| stage.rolls)
    }

    #[must_use]
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_hog_wild_rolls(mut self, rolls: u32) -> Self {
        self.hog_wild_rolls = rolls;
        self
    }
}

fn leads_by(score: u32, other: u32, margin: u32) -> bool {
    score.checked_sub(other).is_some_and(|lead| lead >= margin)
}

/// Picks a base roll count from a [`StageTable`] and refines it with the
/// Hog Wild and Swine Swap seekers.
///
/// - leading: [`hog_wild_strategy`] over the stage's `leading` count
/// - trailing: [`piggyswap_strategy`] over hog-wild of `trailing`
/// - otherwise: [`hog_wild_strategy`] over `even`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedStrategy {
    pub table: StageTable,
}

impl StagedStrategy {
    #[must_use]
    pub fn new(table: StageTable) -> Self {
        Self { table }
    }
}

impl Strategy for StagedStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let table = &self.table;

        if is_hog_wild(score, opponent_score) {
            return table.hog_wild_rolls;
        }

        let rolls = table.rolls_for(score);
        if leads_by(score, opponent_score, table.margin) {
            hog_wild_strategy(score, opponent_score, rolls.leading)
        } else if leads_by(opponent_score, score, table.margin) {
            let fallback = hog_wild_strategy(score, opponent_score, rolls.trailing);
            piggyswap_strategy(score, opponent_score, fallback)
        } else {
            hog_wild_strategy(score, opponent_score, rolls.even)
        }
    }

    fn name(&self) -> String {
        "staged_strategy".to_string()
    }
}

/// The strongest built-in strategy.
///
/// Starts from [`StagedStrategy`], takes Free Bacon when it is worth at
/// least `bacon_margin`, and while behind prefers a roll count that can
/// set up a Swine Swap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalStrategy {
    pub staged: StagedStrategy,
    pub bacon_margin: u32,
}

impl Default for FinalStrategy {
    fn default() -> Self {
        Self {
            staged: StagedStrategy::default(),
            bacon_margin: 6,
        }
    }
}

impl FinalStrategy {
    #[must_use]
    pub fn with_table(mut self, table: StageTable) -> Self {
        self.staged = StagedStrategy::new(table);
        self
    }

    #[must_use]
    pub fn with_bacon_margin(mut self, margin: u32) -> Self {
        self.bacon_margin = margin;
        self
    }
}

impl Strategy for FinalStrategy {
    fn num_rolls(&self, score: u32, opponent_score: u32) -> u32 {
        let baseline = self.staged.num_rolls(score, opponent_score);
        let rolls = bacon_strategy(score, opponent_score, self.bacon_margin, baseline);

        if score < opponent_score {
            piggyswap_strategy(score, opponent_score, rolls)
        } else {
            rolls
        }
    }

    fn name(&self) -> String {
        "final_strategy".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rolls_for_bands() {
        let table = StageTable::default();
        assert_eq!(table.rolls_for(0), StageRolls::new(6, 5, 4));
        assert_eq!(table.rolls_for(24), StageRolls::new(6, 5, 4));
        assert_eq!(table.rolls_for(25), StageRolls::new(4, 5, 3));
        assert_eq!(table.rolls_for(69), StageRolls::new(3, 4, 2));
        assert_eq!(table.rolls_for(70), StageRolls::new(2, 3, 1));
        assert_eq!(table.rolls_for(150), StageRolls::new(2, 3, 1));
    }

    #[test]
    fn test_staged_multiple_of_seven() {
        let staged = StagedStrategy::default();
        assert_eq!(staged.num_rolls(0, 0), 4);
        assert_eq!(staged.num_rolls(3, 4), 4);
        assert_eq!(staged.num_rolls(12, 23), 4);
        assert_eq!(staged.num_rolls(90, 50), 4);
    }

    #[test]
    fn test_staged_opening_stage() {
        let staged = StagedStrategy::default();
        // Leading by 10.
        assert_eq!(staged.num_rolls(10, 0), 6);
        // Even.
        assert_eq!(staged.num_rolls(5, 0), 4);
        // Free Bacon would make it 7.
        assert_eq!(staged.num_rolls(6, 0), 0);
        // Trailing, no swap in reach.
        assert_eq!(staged.num_rolls(2, 20), 5);
        // Trailing, 23 + 8 = 31 mirrors 13.
        assert_eq!(staged.num_rolls(13, 23), 8);
    }

    #[test]
    fn test_staged_later_stages() {
        let staged = StagedStrategy::default();
        assert_eq!(staged.num_rolls(30, 0), 4);
        assert_eq!(staged.num_rolls(30, 31), 3);
        assert_eq!(staged.num_rolls(50, 51), 2);
        assert_eq!(staged.num_rolls(80, 82), 1);
        assert_eq!(staged.num_rolls(90, 52), 2);
        // Bacon against 51 is 6: 90 + 6 + 51 = 147.
        assert_eq!(staged.num_rolls(90, 51), 0);
    }

    #[test]
    fn test_staged_custom_table() {
        let table = StageTable {
            margin: 5,
            hog_wild_rolls: 2,
            stages: vec![],
            endgame: StageRolls::new(9, 8, 7),
        };
        let staged = StagedStrategy::new(table);

        assert_eq!(staged.num_rolls(0, 0), 2);
        assert_eq!(staged.num_rolls(11, 5), 9);
        assert_eq!(staged.num_rolls(5, 3), 7);
    }

    #[test]
    fn test_final_strategy() {
        let strategy = FinalStrategy::default();
        assert_eq!(strategy.num_rolls(0, 0), 4);
        // Staged already fishes for the swap.
        assert_eq!(strategy.num_rolls(13, 23), 8);
        // Bacon against 76 is 8.
        assert_eq!(strategy.num_rolls(20, 76), 0);
        // Bacon against 15 is 6, but rolling 6 can swap 12 with 21.
        assert_eq!(strategy.num_rolls(12, 15), 6);
    }

    #[test]
    fn test_final_strategy_leading_skips_swap() {
        let strategy = FinalStrategy::default().with_bacon_margin(20);
        // 12 + 9 = 21 would mirror 12, but we aren't behind.
        assert_eq!(strategy.num_rolls(12, 12), StagedStrategy::default().num_rolls(12, 12));
    }

    #[test]
    fn test_table_serialization() {
        let table = StageTable::default().with_margin(8).with_hog_wild_rolls(3);
        let json = serde_json::to_string(&table).unwrap();
        let deserialized: StageTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, deserialized);
    }
}
