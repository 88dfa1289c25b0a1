//! The game loop.

use tracing::{debug, trace};

use super::record::{GameLog, GameOutcome, TurnRecord};
use crate::core::{GameConfig, PlayerId, Scores};
use crate::dice::DiceRack;
use crate::rules::{is_swap, resolve_turn, select_dice, RuleError};
use crate::strategy::Strategy;

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// `PlayerId` is about to move.
    Turn(PlayerId),
    /// A score has reached the goal.
    GameOver,
}

/// One game between two strategies.
///
/// Each [`step`](Game::step) plays one turn:
///
/// 1. pick the die from the combined score (Hog Wild)
/// 2. ask the mover's strategy for a roll count
/// 3. resolve the turn against the opponent's score
/// 4. credit the mover, or on a 0 credit the roll count to the opponent (Boar)
/// 5. exchange scores on a Swine Swap
/// 6. hand the turn over, or finish once either score reaches the goal
pub struct Game<'s> {
    strategies: [&'s dyn Strategy; 2],
    goal: u32,
    scores: Scores,
    phase: GamePhase,
    turns: u32,
}

impl<'s> Game<'s> {
    pub fn new(strategy0: &'s dyn Strategy, strategy1: &'s dyn Strategy, config: &GameConfig) -> Self {
        let scores = config.initial_scores;
        let phase = if scores.reached(config.goal) {
            GamePhase::GameOver
        } else {
            GamePhase::Turn(config.first_player)
        };

        Self {
            strategies: [strategy0, strategy1],
            goal: config.goal,
            scores,
            phase,
            turns: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn scores(&self) -> Scores {
        self.scores
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            scores: self.scores,
            turns: self.turns,
        }
    }

    /// Play one turn. Returns `None` once the game is over.
    pub fn step<R: DiceRack + ?Sized>(
        &mut self,
        rack: &mut R,
    ) -> Result<Option<TurnRecord>, RuleError> {
        let player = match self.phase {
            GamePhase::Turn(player) => player,
            GamePhase::GameOver => return Ok(None),
        };
        let opponent = player.other();

        let (score0, score1) = self.scores.pair();
        let dice = select_dice(score0, score1);

        let (own, other) = self.scores.perspective(player);
        let num_rolls = self.strategies[player.index()].num_rolls(own, other);
        let turn_score = resolve_turn(num_rolls, other, self.goal, rack.dice(dice))?;

        let boar = turn_score == 0;
        let (credited, points) = if boar {
            (opponent, num_rolls)
        } else {
            (player, turn_score)
        };
        self.scores[credited] = self.scores[credited]
            .checked_add(points)
            .ok_or(RuleError::ScoreOverflow)?;

        let (score0, score1) = self.scores.pair();
        let swapped = is_swap(score0, score1);
        if swapped {
            self.scores.swap();
        }

        self.turns += 1;
        self.phase = if self.scores.reached(self.goal) {
            GamePhase::GameOver
        } else {
            GamePhase::Turn(opponent)
        };

        trace!(
            turn = self.turns,
            player = player.index(),
            %dice,
            num_rolls,
            turn_score,
            boar,
            swapped,
            score0 = self.scores[PlayerId::ZERO],
            score1 = self.scores[PlayerId::ONE],
            "turn resolved"
        );

        Ok(Some(TurnRecord {
            player,
            dice,
            num_rolls,
            turn_score,
            boar,
            swapped,
            scores: self.scores,
        }))
    }

    /// Play until the game is over.
    pub fn run<R: DiceRack + ?Sized>(mut self, rack: &mut R) -> Result<GameOutcome, RuleError> {
        while self.step(rack)?.is_some() {}
        Ok(self.finish())
    }

    /// Play until the game is over, keeping every turn.
    pub fn run_logged<R: DiceRack + ?Sized>(
        mut self,
        rack: &mut R,
    ) -> Result<(GameOutcome, GameLog), RuleError> {
        let mut log = GameLog::new();
        while let Some(record) = self.step(rack)? {
            log.push(record);
        }
        Ok((self.finish(), log))
    }

    fn finish(&self) -> GameOutcome {
        let outcome = self.outcome();
        debug!(
            turns = outcome.turns,
            score0 = outcome.scores[PlayerId::ZERO],
            score1 = outcome.scores[PlayerId::ONE],
            winner = outcome.winner().index(),
            "game over"
        );
        outcome
    }
}

/// Simulate a game and return the final scores, player 0's first.
///
/// `strategy0` belongs to player 0, `strategy1` to player 1; who moves
/// first comes from `config`.
pub fn play<R: DiceRack + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    rack: &mut R,
    config: &GameConfig,
) -> Result<GameOutcome, RuleError> {
    Game::new(strategy0, strategy1, config).run(rack)
}

/// [`play`], also returning the turn-by-turn log.
pub fn play_logged<R: DiceRack + ?Sized>(
    strategy0: &dyn Strategy,
    strategy1: &dyn Strategy,
    rack: &mut R,
    config: &GameConfig,
) -> Result<(GameOutcome, GameLog), RuleError> {
    Game::new(strategy0, strategy1, config).run_logged(rack)
}
