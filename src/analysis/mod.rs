//! Exact position analysis.
//!
//! `Solver` answers "does the side to move win with perfect play?" by
//! searching every continuation. It is slower than the threshold
//! calculator but makes no structural assumptions, so it doubles as a
//! check on it.

pub mod solver;

pub use solver::{classify, winning_factors, Outcome, Solver};
