//! Game parameters.
//!
//! A session plays under one immutable `GameParameters` value. Parameters
//! are replaced wholesale (never edited in place) when the mode changes:
//! - `ParameterMode::Classic`: the fixed 9 / 1000 regular easy game
//! - `ParameterMode::Custom`: caller-supplied bound, target, and flags
//!
//! Invalid bounds are rejected here so the calculator never sees a
//! degenerate range.

use serde::{Deserialize, Serialize};

use super::error::{NimError, NimResult};

/// Largest factor in classic mode.
pub const CLASSIC_MAX_ENTRY: u32 = 9;

/// Target product in classic mode.
pub const CLASSIC_TARGET: u64 = 1000;

/// Smallest legal factor.
pub const MIN_FACTOR: u32 = 2;

/// Which parameter set is in force.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterMode {
    /// Fixed defaults: max entry 9, target 1000, regular, easy.
    #[default]
    Classic,
    /// Caller-supplied parameters.
    Custom,
}

/// Immutable per-session configuration.
///
/// ## Example
///
/// ```
/// use multiplicative_nim::core::GameParameters;
///
/// let params = GameParameters::custom(12, 5000)
///     .unwrap()
///     .with_misere(true)
///     .with_hard_mode(true);
///
/// assert_eq!(params.max_entry(), 12);
/// assert!(params.misere());
///
/// assert!(GameParameters::custom(2, 5000).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameParameters {
    max_entry: u32,
    target: u64,
    misere: bool,
    hard_mode: bool,
}

impl GameParameters {
    /// The classic game: max entry 9, target 1000, regular, easy.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            max_entry: CLASSIC_MAX_ENTRY,
            target: CLASSIC_TARGET,
            misere: false,
            hard_mode: false,
        }
    }

    /// Custom parameters. Both flags start off.
    ///
    /// Rejects `max_entry < 3` and `target < 2`.
    pub fn custom(max_entry: u32, target: u64) -> NimResult<Self> {
        let params = Self {
            max_entry,
            target,
            misere: false,
            hard_mode: false,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the bounds `custom` enforces.
    ///
    /// Needed for values that arrive through deserialization.
    pub fn validate(&self) -> NimResult<()> {
        if self.max_entry < MIN_FACTOR + 1 {
            return Err(NimError::InvalidMaxEntry(self.max_entry));
        }
        if self.target < 2 {
            return Err(NimError::InvalidTarget(self.target));
        }
        Ok(())
    }

    /// Set the misère flag.
    #[must_use]
    pub const fn with_misere(mut self, misere: bool) -> Self {
        self.misere = misere;
        self
    }

    /// Set the hard-mode flag.
    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    /// Largest legal factor.
    #[must_use]
    pub const fn max_entry(&self) -> u32 {
        self.max_entry
    }

    /// Product that ends the game.
    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    /// Misère variant flag.
    #[must_use]
    pub const fn misere(&self) -> bool {
        self.misere
    }

    /// Computer plays optimally when set, randomly otherwise.
    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// Is `factor` a legal move under these parameters?
    #[must_use]
    pub const fn accepts(&self, factor: u32) -> bool {
        factor >= MIN_FACTOR && factor <= self.max_entry
    }
}

impl Default for GameParameters {
    fn default() -> Self {
        Self::classic()
    }
}

impl std::fmt::Display for GameParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "factors 2..={}, target {}, {}, {}",
            self.max_entry,
            self.target,
            if self.misere { "misère" } else { "regular" },
            if self.hard_mode { "hard" } else { "easy" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_defaults() {
        let params = GameParameters::classic();
        assert_eq!(params.max_entry(), 9);
        assert_eq!(params.target(), 1000);
        assert!(!params.misere());
        assert!(!params.hard_mode());
        assert_eq!(params, GameParameters::default());
    }

    #[test]
    fn test_custom_builder() {
        let params = GameParameters::custom(25, 730_000)
            .unwrap()
            .with_misere(true)
            .with_hard_mode(true);

        assert_eq!(params.max_entry(), 25);
        assert_eq!(params.target(), 730_000);
        assert!(params.misere());
        assert!(params.hard_mode());
    }

    #[test]
    fn test_custom_rejects_degenerate_bounds() {
        assert_eq!(GameParameters::custom(2, 100), Err(NimError::InvalidMaxEntry(2)));
        assert_eq!(GameParameters::custom(0, 100), Err(NimError::InvalidMaxEntry(0)));
        assert_eq!(GameParameters::custom(9, 1), Err(NimError::InvalidTarget(1)));
        assert!(GameParameters::custom(3, 2).is_ok());
    }

    #[test]
    fn test_validate_deserialized() {
        let json = r#"{"max_entry":1,"target":100,"misere":false,"hard_mode":false}"#;
        let params: GameParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.validate(), Err(NimError::InvalidMaxEntry(1)));
        assert!(GameParameters::classic().validate().is_ok());
    }

    #[test]
    fn test_accepts() {
        let params = GameParameters::classic();
        assert!(!params.accepts(0));
        assert!(!params.accepts(1));
        assert!(params.accepts(2));
        assert!(params.accepts(9));
        assert!(!params.accepts(10));
    }

    #[test]
    fn test_display() {
        let params = GameParameters::classic();
        assert_eq!(format!("{}", params), "factors 2..=9, target 1000, regular, easy");
    }

    #[test]
    fn test_serde() {
        let params = GameParameters::custom(7, 300).unwrap().with_misere(true);
        let json = serde_json::to_string(&params).unwrap();
        let restored: GameParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, restored);
    }

    #[test]
    fn test_parameter_mode_default() {
        assert_eq!(ParameterMode::default(), ParameterMode::Classic);
    }
}
