//! Game state for one session.
//!
//! ## GameState
//!
//! - Running product (starts at 1, never decreases)
//! - Ordered move history (turn order, human first)
//! - Lifecycle phase (`NotStarted` → `InProgress` → `Terminal`)
//!
//! History uses an `im` persistent vector so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Factor, MoveRecord};
use super::player::Side;

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created or reset, not yet accepting moves.
    #[default]
    NotStarted,
    /// Accepting moves.
    InProgress,
    /// Target reached. Absorbing until reset.
    Terminal,
}

/// Mutable state of a single session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    product: u64,
    history: Vector<MoveRecord>,
    phase: Phase,
}

impl GameState {
    /// Fresh state: product 1, no moves, not started.
    #[must_use]
    pub fn new() -> Self {
        Self {
            product: 1,
            history: Vector::new(),
            phase: Phase::NotStarted,
        }
    }

    /// Current running product.
    #[must_use]
    pub fn product(&self) -> u64 {
        self.product
    }

    /// Every move so far, in turn order.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Submitted factors in turn order.
    #[must_use]
    pub fn factors(&self) -> Vec<u32> {
        self.history.iter().map(|m| m.factor.value()).collect()
    }

    /// Number of moves made.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Side that plays next.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        Side::for_move(self.history.len())
    }

    /// Side that made the most recent move, if any.
    #[must_use]
    pub fn last_mover(&self) -> Option<Side> {
        self.history.back().map(|m| m.side)
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Has the target been reached?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    // === Mutation (rules and session only) ===

    /// Append a factor for the side to move and multiply it in.
    ///
    /// Saturates instead of overflowing; any saturated product is already
    /// past every representable target.
    pub(crate) fn push_factor(&mut self, factor: Factor) -> MoveRecord {
        let side = self.side_to_move();
        self.product = self.product.saturating_mul(u64::from(factor.value()));
        let record = MoveRecord::new(side, factor, self.product);
        self.history.push_back(record);
        record
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
