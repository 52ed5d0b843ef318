//! Computer opponents.
//!
//! ## Overview
//!
//! - `optimal`: the pure threshold-induction calculator
//! - `policy`: the `Strategy` seam plus the hard (optimal) and easy
//!   (uniform random) implementations
//!
//! ## Usage
//!
//! ```rust
//! use multiplicative_nim::core::GameRng;
//! use multiplicative_nim::strategy::{compute_optimal_factor, EffectiveTarget};
//!
//! let mut rng = GameRng::new(42);
//! let factor = compute_optimal_factor(500, EffectiveTarget::regular(1000), 9, &mut rng);
//! assert_eq!(factor, 3);
//! ```

pub mod optimal;
pub mod policy;

pub use optimal::{compute_optimal_factor, decide, Decision, EffectiveTarget};
pub use policy::{for_parameters, OptimalStrategy, RandomStrategy, Strategy};
