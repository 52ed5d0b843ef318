//! Exact win/loss classification by exhaustive backward induction.
//!
//! Works on the abstract "first to reach the threshold wins" game, the same
//! game `decide` plays. Positions are memoized by product, so only products
//! actually reachable from the queried position are visited.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::MIN_FACTOR;
use crate::strategy::EffectiveTarget;

/// Value of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Some move wins against any reply.
    Win,
    /// Every move loses against best reply.
    Loss,
}

/// Memoizing solver for one threshold and factor bound.
#[derive(Clone, Debug)]
pub struct Solver {
    target: EffectiveTarget,
    max_entry: u32,
    memo: FxHashMap<u64, Outcome>,
}

impl Solver {
    /// Solver for `target` with factors `2..=max_entry`.
    #[must_use]
    pub fn new(target: EffectiveTarget, max_entry: u32) -> Self {
        Self {
            target,
            max_entry,
            memo: FxHashMap::default(),
        }
    }

    /// Number of positions solved so far.
    #[must_use]
    pub fn positions_evaluated(&self) -> usize {
        self.memo.len()
    }

    /// Does `product` already meet the threshold?
    #[must_use]
    pub fn is_reached(&self, product: u64) -> bool {
        self.target.reached_by(u128::from(product))
    }

    /// Value of `product` for the side to move.
    ///
    /// A product that already meets the threshold is a loss: the previous
    /// mover got there first.
    pub fn classify(&mut self, product: u64) -> Outcome {
        if self.is_reached(product) {
            return Outcome::Loss;
        }
        if let Some(&outcome) = self.memo.get(&product) {
            return outcome;
        }

        let mut outcome = Outcome::Loss;
        for factor in MIN_FACTOR..=self.max_entry {
            let next = product.max(1).saturating_mul(u64::from(factor));
            if self.is_reached(next) || self.classify(next) == Outcome::Loss {
                outcome = Outcome::Win;
                break;
            }
        }

        self.memo.insert(product, outcome);
        outcome
    }

    /// Every factor that wins from `product`, ascending.
    pub fn winning_factors(&mut self, product: u64) -> SmallVec<[u32; 8]> {
        if self.is_reached(product) {
            return SmallVec::new();
        }
        (MIN_FACTOR..=self.max_entry)
            .filter(|&factor| {
                let next = product.max(1).saturating_mul(u64::from(factor));
                self.is_reached(next) || self.classify(next) == Outcome::Loss
            })
            .collect()
    }
}

/// One-shot classification of `product`.
///
/// ```
/// use multiplicative_nim::analysis::{classify, Outcome};
/// use multiplicative_nim::strategy::EffectiveTarget;
///
/// // 112 * 9 >= 1000
/// assert_eq!(classify(112, EffectiveTarget::regular(1000), 9), Outcome::Win);
/// // 56 * 2 = 112 hands the opponent that win
/// assert_eq!(classify(56, EffectiveTarget::regular(1000), 9), Outcome::Loss);
/// ```
#[must_use]
pub fn classify(product: u64, target: EffectiveTarget, max_entry: u32) -> Outcome {
    Solver::new(target, max_entry).classify(product)
}

/// One-shot list of winning factors from `product`.
#[must_use]
pub fn winning_factors(product: u64, target: EffectiveTarget, max_entry: u32) -> SmallVec<[u32; 8]> {
    Solver::new(target, max_entry).winning_factors(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_bands() {
        let mut solver = Solver::new(EffectiveTarget::regular(1000), 9);

        // Win [1, 3], Loss [4, 6], Win [7, 55], Loss [56, 111], Win [112, 999]
        for p in 1..=3 {
            assert_eq!(solver.classify(p), Outcome::Win, "product {}", p);
        }
        for p in 4..=6 {
            assert_eq!(solver.classify(p), Outcome::Loss, "product {}", p);
        }
        for p in [7, 20, 55] {
            assert_eq!(solver.classify(p), Outcome::Win, "product {}", p);
        }
        for p in [56, 90, 111] {
            assert_eq!(solver.classify(p), Outcome::Loss, "product {}", p);
        }
        for p in [112, 500, 999] {
            assert_eq!(solver.classify(p), Outcome::Win, "product {}", p);
        }
        assert!(solver.positions_evaluated() > 0);
    }

    #[test]
    fn test_reached_is_loss() {
        assert_eq!(classify(1000, EffectiveTarget::regular(1000), 9), Outcome::Loss);
        assert!(winning_factors(1000, EffectiveTarget::regular(1000), 9).is_empty());
    }

    #[test]
    fn test_winning_factors_from_start() {
        // From 1 every move into [4, 6] wins.
        let factors = winning_factors(1, EffectiveTarget::regular(1000), 9);
        assert_eq!(factors.as_slice(), &[4, 5, 6]);
    }

    #[test]
    fn test_winning_factors_near_target() {
        // 500 * 2 already reaches 1000.
        let factors = winning_factors(500, EffectiveTarget::regular(1000), 9);
        assert_eq!(factors.as_slice(), &[2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
