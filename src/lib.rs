//! # multiplicative-nim
//!
//! Engine for two-player multiplicative Nim: players alternately multiply a
//! running product by a factor in `[2, max_entry]`, and the move that takes
//! the product to the target ends the game.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: A `Session` owns its parameters, state, and RNG.
//!    No globals, no shared mutation.
//!
//! 2. **Pure Core**: The optimal-move calculator and the rules are pure
//!    functions of their inputs (plus an explicit RNG).
//!
//! 3. **Reproducible**: Every random draw comes from a seeded `GameRng`,
//!    and snapshots capture its position.
//!
//! ## Modules
//!
//! - `core`: Sides, factors, parameters, state, RNG, errors
//! - `rules`: Turn application, terminal detection, winner
//! - `strategy`: Optimal calculator and computer policies
//! - `analysis`: Exact solver for checking positions
//! - `session`: Lifecycle and turn orchestration

pub mod core;
pub mod rules;
pub mod strategy;
pub mod analysis;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Factor, GameParameters, GameRng, GameRngState, GameState, MoveRecord, NimError, NimResult,
    ParameterMode, Phase, Side,
};

pub use crate::rules::{GameResult, NimRules};

pub use crate::strategy::{
    compute_optimal_factor, EffectiveTarget, OptimalStrategy, RandomStrategy, Strategy,
};

pub use crate::analysis::{Outcome, Solver};

pub use crate::session::{Session, SessionSnapshot, Settings, TurnResult};
