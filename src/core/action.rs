//! Move representation: a validated factor plus the side that played it.
//!
//! A `Factor` can only be obtained through validation against a session's
//! maximum entry, so every factor in a history is known to lie in
//! `[2, max_entry]`.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::config::MIN_FACTOR;
use super::error::{NimError, NimResult};
use super::player::Side;

/// A legal factor.
///
/// ## Example
///
/// ```
/// use multiplicative_nim::core::Factor;
///
/// let f = Factor::parse(" 7 ", 9).unwrap();
/// assert_eq!(f.value(), 7);
///
/// assert!(Factor::parse("seven", 9).is_err());
/// assert!(Factor::new(10, 9).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Factor(u32);

impl Factor {
    /// Validate `value` against `[2, max_entry]`.
    pub fn new(value: i64, max_entry: u32) -> NimResult<Self> {
        if value < i64::from(MIN_FACTOR) || value > i64::from(max_entry) {
            return Err(NimError::FactorOutOfRange {
                factor: value,
                max_entry,
            });
        }
        // In range, so it fits.
        Ok(Self(value as u32))
    }

    /// Parse raw text, then validate.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a base-10
    /// integer is `NotAnInteger`, distinct from a range failure. Integers
    /// too large for `i64` are out of range, reported at the saturated value.
    #[instrument(level = "trace")]
    pub fn parse(text: &str, max_entry: u32) -> NimResult<Self> {
        let value: i64 = match text.trim().parse() {
            Ok(value) => value,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(NimError::NotAnInteger(text.to_string())),
            },
        };
        Self::new(value, max_entry)
    }

    /// Wrap a value the caller already knows is legal.
    pub(crate) const fn trusted(value: u32) -> Self {
        Self(value)
    }

    /// The raw factor.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded move with the side that made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who played.
    pub side: Side,
    /// What was played.
    pub factor: Factor,
    /// Product after the move.
    pub product: u64,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(side: Side, factor: Factor, product: u64) -> Self {
        Self {
            side,
            factor,
            product,
        }
    }
}
