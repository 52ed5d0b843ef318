//! Optimal move calculation by threshold backward induction.
//!
//! In the "reach `T` first" game with factors `2..=M`:
//!
//! - every product in `[ceil(T/M), T)` wins at once (multiply by `M`)
//! - every product in `[ceil(T/2M), ceil(T/M))` loses: the smallest move
//!   already hands the opponent an immediate win
//!
//! so reaching `ceil(T/2M)` is itself a win condition, and the same
//! reasoning applies again with that as the target. The calculator walks
//! these thresholds down until the product clears one, then plays into the
//! losing band above it.
//!
//! Targets are carried in half units so the misère game, which plays the
//! regular game against `T/2`, keeps the exact fractional threshold for
//! odd `T`.

use serde::{Deserialize, Serialize};

use crate::core::config::MIN_FACTOR;
use crate::core::GameRng;

/// A target threshold, stored as twice its value.
///
/// ```
/// use multiplicative_nim::strategy::EffectiveTarget;
///
/// assert_eq!(EffectiveTarget::regular(1000).half_units(), 2000);
/// assert_eq!(EffectiveTarget::halved(1001).half_units(), 1001);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectiveTarget(u128);

impl EffectiveTarget {
    /// Target `value`.
    #[must_use]
    pub const fn regular(value: u64) -> Self {
        Self(value as u128 * 2)
    }

    /// Target `value / 2`, kept exact for odd `value`.
    #[must_use]
    pub const fn halved(value: u64) -> Self {
        Self(value as u128)
    }

    /// Target for a game: halved under misère.
    #[must_use]
    pub const fn for_game(target: u64, misere: bool) -> Self {
        if misere {
            Self::halved(target)
        } else {
            Self::regular(target)
        }
    }

    /// Twice the threshold value.
    #[must_use]
    pub const fn half_units(self) -> u128 {
        self.0
    }

    /// Does `product` meet or exceed the threshold?
    #[must_use]
    pub const fn reached_by(self, product: u128) -> bool {
        product.saturating_mul(2) >= self.0
    }

    /// `ceil(target / divisor)`, always a whole number.
    const fn ceil_div(self, divisor: u128) -> u128 {
        // ceil((h / 2) / d) == ceil(h / 2d)
        self.0.div_ceil(divisor * 2)
    }
}

/// One step of the induction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// A forcing factor exists.
    Forced(u32),
    /// The product sits in a losing band; no move forces anything.
    Undecided,
}

/// Decide the move from `product` without drawing randomness.
///
/// Returns `Decision::Undecided` where the induction gives no forcing move.
#[must_use]
pub fn decide(product: u64, target: EffectiveTarget, max_entry: u32) -> Decision {
    let product = u128::from(product.max(1));
    let max = u128::from(max_entry.max(MIN_FACTOR + 1));
    let mut target = target;

    loop {
        let last_target = target.ceil_div(2 * max);
        if product < last_target {
            // last_target < target whenever this branch is taken, so the
            // loop descends strictly toward 1.
            target = EffectiveTarget::regular(last_target as u64);
            continue;
        }

        let win_threshold = target.ceil_div(max);
        if product >= win_threshold {
            // floor(2 * (target - 1) / product) in half units.
            let reach = target.half_units().saturating_sub(2) / product;
            let factor = reach.min(max).max(u128::from(MIN_FACTOR));
            return Decision::Forced(factor as u32);
        }
        return Decision::Undecided;
    }
}

/// Factor that keeps the mover winning, or a uniform draw when the
/// position is not decidable.
///
/// Always in `[2, max_entry]` for `product >= 1` and `max_entry >= 3`.
pub fn compute_optimal_factor(
    product: u64,
    target: EffectiveTarget,
    max_entry: u32,
    rng: &mut GameRng,
) -> u32 {
    match decide(product, target, max_entry) {
        Decision::Forced(factor) => factor,
        Decision::Undecided => rng.gen_factor(max_entry),
    }
}
