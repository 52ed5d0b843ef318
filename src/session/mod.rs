//! A single game session: lifecycle plus turn orchestration.
//!
//! ## Lifecycle
//!
//! `NotStarted` → `InProgress` on `start`, `InProgress` → `Terminal` on the
//! move that reaches the target, and any phase → `NotStarted` on `reset`.
//! Every settings change (mode switch, misère or difficulty toggle, new
//! custom values) resets and restarts, so a game never mixes parameters.
//!
//! ## Turns
//!
//! `submit_human_move` validates the factor, applies it, and, unless that
//! ended the game, applies the computer's reply in the same call.
//!
//! ```
//! use multiplicative_nim::Session;
//!
//! let mut session = Session::new(42);
//! session.start();
//!
//! let turn = session.submit_human_move(9).unwrap();
//! let reply = turn.computer.unwrap().value();
//! assert_eq!(turn.product, 9 * u64::from(reply));
//! assert_eq!(turn.history, vec![9, reply]);
//! ```

mod snapshot;

pub use snapshot::SessionSnapshot;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::core::{
    Factor, GameParameters, GameRng, GameState, NimError, NimResult, ParameterMode, Phase,
};
use crate::rules::{GameResult, NimRules};
use crate::strategy;

/// Parameter selection, kept across resets.
///
/// Classic mode pins both flags off, so toggles made while in classic mode
/// only affect `custom` and take effect on switching to custom mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Which parameter set is in force.
    pub mode: ParameterMode,
    /// Parameters used in custom mode.
    pub custom: GameParameters,
}

impl Settings {
    /// Parameters for the current mode.
    #[must_use]
    pub fn active(&self) -> GameParameters {
        match self.mode {
            ParameterMode::Classic => GameParameters::classic(),
            ParameterMode::Custom => self.custom,
        }
    }
}

/// What one submission did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// The human's factor.
    pub human: Factor,
    /// The computer's reply, absent when the human's move ended the game.
    pub computer: Option<Factor>,
    /// Product after the turn.
    pub product: u64,
    /// Full history after the turn.
    pub history: Vec<u32>,
    /// Set on the move that reached the target.
    pub outcome: Option<GameResult>,
}

/// One human-versus-computer session.
#[derive(Clone, Debug)]
pub struct Session {
    settings: Settings,
    params: GameParameters,
    state: GameState,
    rng: GameRng,
}

impl Session {
    /// Classic session, not yet started.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), seed)
    }

    /// Custom session under `params`, not yet started.
    #[must_use]
    pub fn with_parameters(params: GameParameters, seed: u64) -> Self {
        Self::with_settings(
            Settings {
                mode: ParameterMode::Custom,
                custom: params,
            },
            seed,
        )
    }

    fn with_settings(settings: Settings, seed: u64) -> Self {
        Self {
            settings,
            params: settings.active(),
            state: GameState::new(),
            rng: GameRng::new(seed),
        }
    }

    // === Accessors ===

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parameters of the current game.
    #[must_use]
    pub fn params(&self) -> &GameParameters {
        &self.params
    }

    /// Game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Running product.
    #[must_use]
    pub fn product(&self) -> u64 {
        self.state.product()
    }

    /// Factors played so far.
    #[must_use]
    pub fn history(&self) -> Vec<u32> {
        self.state.factors()
    }

    /// Outcome once the target is reached.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        NimRules::new(&self.params).is_terminal(&self.state)
    }

    // === Lifecycle ===

    /// Begin play under the current settings.
    ///
    /// Only leaves `NotStarted`; a running or finished game is untouched.
    #[instrument(skip(self), fields(mode = ?self.settings.mode))]
    pub fn start(&mut self) {
        if self.state.phase() != Phase::NotStarted {
            debug!(phase = ?self.state.phase(), "start ignored");
            return;
        }
        self.params = self.settings.active();
        self.state.set_phase(Phase::InProgress);
        info!(params = %self.params, "session started");
    }

    /// Discard the current game. Settings survive.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        debug!("session reset");
    }

    /// Reset, then start.
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Switch between classic and custom parameters.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: ParameterMode) {
        self.settings.mode = mode;
        self.restart();
    }

    /// Replace the custom bound and target, keeping the flags.
    ///
    /// Invalid values leave settings and game untouched.
    #[instrument(skip(self))]
    pub fn apply_custom(&mut self, max_entry: u32, target: u64) -> NimResult<()> {
        let custom = GameParameters::custom(max_entry, target)
            .inspect_err(|err| warn!(%err, "custom parameters rejected"))?
            .with_misere(self.settings.custom.misere())
            .with_hard_mode(self.settings.custom.hard_mode());
        self.settings.custom = custom;
        self.restart();
        Ok(())
    }

    /// Flip the misère flag of the custom parameters.
    #[instrument(skip(self))]
    pub fn toggle_misere(&mut self) {
        let custom = self.settings.custom;
        self.settings.custom = custom.with_misere(!custom.misere());
        self.restart();
    }

    /// Flip the difficulty of the custom parameters.
    #[instrument(skip(self))]
    pub fn toggle_hard_mode(&mut self) {
        let custom = self.settings.custom;
        self.settings.custom = custom.with_hard_mode(!custom.hard_mode());
        self.restart();
    }

    // === Turns ===

    /// Play the human's factor and, if the game continues, the computer's
    /// reply.
    ///
    /// Rejected submissions leave the state unchanged.
    #[instrument(skip(self), fields(product = self.state.product()))]
    pub fn submit_human_move(&mut self, value: i64) -> NimResult<TurnResult> {
        match self.state.phase() {
            Phase::NotStarted => return Err(NimError::NotStarted),
            Phase::Terminal => {
                warn!("submission after game over");
                return Err(NimError::GameOver);
            }
            Phase::InProgress => {}
        }

        let human = Factor::new(value, self.params.max_entry())
            .inspect_err(|err| warn!(%err, "entry rejected"))?;
        Ok(self.play_turn(human))
    }

    /// Parse raw text and submit it.
    pub fn submit_human_input(&mut self, text: &str) -> NimResult<TurnResult> {
        match self.state.phase() {
            Phase::NotStarted => Err(NimError::NotStarted),
            Phase::Terminal => Err(NimError::GameOver),
            Phase::InProgress => {
                let factor = Factor::parse(text, self.params.max_entry())
                    .inspect_err(|err| warn!(%err, "entry rejected"))?;
                self.submit_human_move(i64::from(factor.value()))
            }
        }
    }

    fn play_turn(&mut self, human: Factor) -> TurnResult {
        let rules = NimRules::new(&self.params);

        let mut outcome = rules.apply_factor(&mut self.state, human);
        let mut computer = None;

        if outcome.is_none() {
            let policy = strategy::for_parameters(&self.params);
            let reply = policy.choose(self.state.product(), &self.params, &mut self.rng);
            debug_assert!(self.params.accepts(reply.value()));
            debug!(strategy = policy.name(), factor = %reply, "computer reply");

            outcome = rules.apply_factor(&mut self.state, reply);
            computer = Some(reply);
        }

        TurnResult {
            human,
            computer,
            product: self.state.product(),
            history: self.state.factors(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    fn hard(max_entry: u32, target: u64) -> GameParameters {
        GameParameters::custom(max_entry, target)
            .unwrap()
            .with_hard_mode(true)
    }

    #[test]
    fn test_new_session_not_started() {
        let session = Session::new(1);
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.product(), 1);
        assert!(session.history().is_empty());
        assert_eq!(*session.params(), GameParameters::classic());
    }

    #[test]
    fn test_submit_before_start() {
        let mut session = Session::new(1);
        assert_eq!(session.submit_human_move(5), Err(NimError::NotStarted));
        assert_eq!(session.submit_human_input("5"), Err(NimError::NotStarted));
    }

    #[test]
    fn test_turn_pair() {
        let mut session = Session::with_parameters(hard(9, 1000), 1);
        session.start();

        // Human 2, computer: from 2 the forcing move is 3 (into [4, 6]).
        let turn = session.submit_human_move(2).unwrap();
        assert_eq!(turn.human.value(), 2);
        assert_eq!(turn.computer.map(Factor::value), Some(3));
        assert_eq!(turn.product, 6);
        assert_eq!(turn.history, vec![2, 3]);
        assert_eq!(turn.outcome, None);
    }

    #[test]
    fn test_human_win_skips_reply() {
        let mut session = Session::with_parameters(hard(9, 8), 1);
        session.start();

        let turn = session.submit_human_move(9).unwrap();
        assert_eq!(turn.computer, None);
        assert_eq!(turn.history, vec![9]);
        assert_eq!(turn.outcome, Some(GameResult::Winner(Side::Human)));
        assert_eq!(session.phase(), Phase::Terminal);
    }

    #[test]
    fn test_computer_win() {
        // From 3, 3 * 9 reaches 20.
        let mut session = Session::with_parameters(hard(9, 20), 1);
        session.start();

        let turn = session.submit_human_move(3).unwrap();
        assert_eq!(turn.computer.map(Factor::value), Some(9));
        assert_eq!(turn.outcome, Some(GameResult::Winner(Side::Computer)));
        assert_eq!(session.outcome(), turn.outcome);
    }

    #[test]
    fn test_rejected_input_leaves_state() {
        let mut session = Session::new(1);
        session.start();
        let before = session.state().clone();

        assert!(matches!(
            session.submit_human_move(1),
            Err(NimError::FactorOutOfRange { factor: 1, max_entry: 9 })
        ));
        assert!(matches!(
            session.submit_human_move(10),
            Err(NimError::FactorOutOfRange { factor: 10, max_entry: 9 })
        ));
        assert!(matches!(
            session.submit_human_input("ten"),
            Err(NimError::NotAnInteger(_))
        ));

        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut session = Session::new(1);
        session.start();
        session.submit_human_move(2).unwrap();
        session.start();
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_toggles_in_classic_mode_only_touch_custom() {
        let mut session = Session::new(1);
        session.toggle_misere();
        session.toggle_hard_mode();

        assert_eq!(*session.params(), GameParameters::classic());
        assert!(session.settings().custom.misere());
        assert!(session.settings().custom.hard_mode());
        assert_eq!(session.phase(), Phase::InProgress);

        session.set_mode(ParameterMode::Custom);
        assert!(session.params().misere());
        assert!(session.params().hard_mode());
    }

    #[test]
    fn test_toggle_resets_game() {
        let mut session = Session::with_parameters(hard(9, 1000), 1);
        session.start();
        session.submit_human_move(2).unwrap();

        session.toggle_misere();
        assert_eq!(session.product(), 1);
        assert!(session.history().is_empty());
        assert_eq!(session.phase(), Phase::InProgress);
        assert!(session.params().misere());
    }

    #[test]
    fn test_apply_custom() {
        let mut session = Session::new(1);
        session.toggle_hard_mode();
        session.set_mode(ParameterMode::Custom);

        session.apply_custom(12, 5000).unwrap();
        assert_eq!(session.params().max_entry(), 12);
        assert_eq!(session.params().target(), 5000);
        assert!(session.params().hard_mode());

        session.submit_human_move(2).unwrap();
        assert_eq!(session.apply_custom(2, 5000), Err(NimError::InvalidMaxEntry(2)));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.params().max_entry(), 12);
    }
}
