//! Turn application and terminal detection.
//!
//! `NimRules` owns no state: it applies a factor to a `GameState`, detects
//! the product reaching the target, and names the winner.
//!
//! ## Winner
//!
//! The side that made the move reaching the target wins: an odd history
//! length means the human moved last. The rule is the same for regular and
//! misère games.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Factor, GameParameters, GameState, NimError, NimResult, Phase, Side};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner() == side
    }

    /// The winning side.
    #[must_use]
    pub fn winner(&self) -> Side {
        let GameResult::Winner(side) = *self;
        side
    }
}

/// Stateless rules for one parameter set.
#[derive(Clone, Copy, Debug)]
pub struct NimRules<'a> {
    params: &'a GameParameters,
}

impl<'a> NimRules<'a> {
    /// Rules under `params`.
    #[must_use]
    pub fn new(params: &'a GameParameters) -> Self {
        Self { params }
    }

    /// Parameters in force.
    #[must_use]
    pub fn params(&self) -> &GameParameters {
        self.params
    }

    /// Has `product` reached the target?
    #[must_use]
    pub fn reaches_target(&self, product: u64) -> bool {
        product >= self.params.target()
    }

    /// Apply a factor for the side to move.
    ///
    /// Appends to history, multiplies the product, and marks the state
    /// terminal if the target is reached. Returns the outcome on that
    /// transition, `None` otherwise.
    ///
    /// The caller guarantees the state is `InProgress`.
    pub fn apply_factor(&self, state: &mut GameState, factor: Factor) -> Option<GameResult> {
        debug_assert_eq!(state.phase(), Phase::InProgress);

        let record = state.push_factor(factor);
        debug!(side = %record.side, factor = %factor, product = record.product, "factor applied");

        if !self.reaches_target(state.product()) {
            return None;
        }

        state.set_phase(Phase::Terminal);
        let result = Self::winner_by_parity(state.move_count());
        info!(
            winner = %result.winner(),
            product = state.product(),
            moves = state.move_count(),
            "target reached"
        );
        Some(result)
    }

    /// Outcome of a finished state, `None` while play continues.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.move_count() > 0 && self.reaches_target(state.product()) {
            Some(Self::winner_by_parity(state.move_count()))
        } else {
            None
        }
    }

    /// Check that `state` could have been produced by play under these rules.
    ///
    /// Every factor must be legal, sides must alternate from the human, each
    /// recorded product must be the running product, and the phase must be
    /// `Terminal` exactly when a move has reached the target.
    pub fn check_state(&self, state: &GameState) -> NimResult<()> {
        let mut product: u64 = 1;
        for (index, record) in state.history().iter().enumerate() {
            let factor = record.factor.value();
            if !self.params.accepts(factor) {
                return Err(NimError::InvalidSnapshot(format!(
                    "move {} has illegal factor {}",
                    index, factor
                )));
            }
            if record.side != Side::for_move(index) {
                return Err(NimError::InvalidSnapshot(format!(
                    "move {} recorded for {}",
                    index, record.side
                )));
            }
            if self.reaches_target(product) {
                return Err(NimError::InvalidSnapshot(format!(
                    "move {} played after the target was reached",
                    index
                )));
            }
            product = product.saturating_mul(u64::from(factor));
            if record.product != product {
                return Err(NimError::InvalidSnapshot(format!(
                    "move {} records product {}, expected {}",
                    index, record.product, product
                )));
            }
        }

        if state.product() != product {
            return Err(NimError::InvalidSnapshot(format!(
                "product {} does not match history ({})",
                state.product(),
                product
            )));
        }

        let finished = state.move_count() > 0 && self.reaches_target(product);
        let phase_ok = match state.phase() {
            Phase::NotStarted => state.move_count() == 0,
            Phase::InProgress => !finished,
            Phase::Terminal => finished,
        };
        if !phase_ok {
            return Err(NimError::InvalidSnapshot(format!(
                "phase {:?} with {} moves and product {}",
                state.phase(),
                state.move_count(),
                product
            )));
        }
        Ok(())
    }

    /// Odd history length: the human moved last and wins.
    #[must_use]
    pub fn winner_by_parity(move_count: usize) -> GameResult {
        if move_count % 2 == 1 {
            GameResult::Winner(Side::Human)
        } else {
            GameResult::Winner(Side::Computer)
        }
    }
}
