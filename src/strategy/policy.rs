//! Computer move policies.
//!
//! Policies are trait-based so the session can swap them per difficulty:
//! - `OptimalStrategy`: threshold induction (hard mode)
//! - `RandomStrategy`: uniform draw over the legal factors (easy mode)

use tracing::debug;

use crate::core::config::MIN_FACTOR;
use crate::core::{Factor, GameParameters, GameRng};

use super::optimal::{compute_optimal_factor, EffectiveTarget};

/// Policy for choosing the computer's factor.
pub trait Strategy: Send + Sync {
    /// Pick a legal factor for the side to move at `product`.
    fn choose(&self, product: u64, params: &GameParameters, rng: &mut GameRng) -> Factor;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Optimal play.
///
/// Regular games play the induction against the real target. Misère games
/// play it against half the target until the product reaches that half,
/// then always play the smallest factor.
#[derive(Clone, Debug, Default)]
pub struct OptimalStrategy;

impl Strategy for OptimalStrategy {
    fn choose(&self, product: u64, params: &GameParameters, rng: &mut GameRng) -> Factor {
        let target = EffectiveTarget::for_game(params.target(), params.misere());
        let value = if params.misere() && target.reached_by(u128::from(product)) {
            MIN_FACTOR
        } else {
            compute_optimal_factor(product, target, params.max_entry(), rng)
        };
        debug!(product, factor = value, misere = params.misere(), "optimal factor");
        Factor::trusted(value)
    }

    fn name(&self) -> &'static str {
        "optimal"
    }
}

/// Uniform random play.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose(&self, product: u64, params: &GameParameters, rng: &mut GameRng) -> Factor {
        let value = rng.gen_factor(params.max_entry());
        debug!(product, factor = value, "random factor");
        Factor::trusted(value)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Policy matching the difficulty in `params`.
#[must_use]
pub fn for_parameters(params: &GameParameters) -> &'static dyn Strategy {
    if params.hard_mode() {
        &OptimalStrategy
    } else {
        &RandomStrategy
    }
}
