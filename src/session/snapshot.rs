//! Session snapshots.
//!
//! A snapshot captures everything needed to resume a session exactly,
//! including the RNG position, so a restored session makes the same
//! computer moves the original would have.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::core::{GameParameters, GameRng, GameRngState, GameState, NimError, NimResult};

use crate::rules::NimRules;

use super::{Session, Settings};

/// Serializable copy of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Settings at capture time.
    pub settings: Settings,
    /// Parameters of the captured game.
    pub params: GameParameters,
    /// Game state.
    pub state: GameState,
    /// RNG position.
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> NimResult<Vec<u8>> {
        bincode::serialize(self).map_err(|err| NimError::InvalidSnapshot(err.to_string()))
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> NimResult<Self> {
        bincode::deserialize(bytes).map_err(|err| NimError::InvalidSnapshot(err.to_string()))
    }
}

impl Session {
    /// Capture the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            settings: self.settings,
            params: self.params,
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// The bytes may be untrusted: parameters are re-validated, must match
    /// the settings, and the game state is replayed against the rules.
    #[instrument(skip(snapshot))]
    pub fn restore(snapshot: SessionSnapshot) -> NimResult<Self> {
        snapshot.params.validate()?;
        snapshot.settings.custom.validate()?;
        if snapshot.params != snapshot.settings.active() {
            return Err(NimError::InvalidSnapshot(format!(
                "parameters ({}) do not match settings ({})",
                snapshot.params,
                snapshot.settings.active()
            )));
        }
        NimRules::new(&snapshot.params).check_state(&snapshot.state)?;

        Ok(Self {
            settings: snapshot.settings,
            params: snapshot.params,
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[test]
    fn test_restore_continues_identically() {
        let mut original = Session::new(99);
        original.start();
        original.submit_human_move(3).unwrap();

        let bytes = original.snapshot().to_bytes().unwrap();
        let mut restored = Session::restore(SessionSnapshot::from_bytes(&bytes).unwrap()).unwrap();

        assert_eq!(restored.history(), original.history());
        assert_eq!(restored.phase(), Phase::InProgress);

        let a = original.submit_human_move(2).unwrap();
        let b = restored.submit_human_move(2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            SessionSnapshot::from_bytes(&[1, 2, 3]),
            Err(NimError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_restore_rejects_invalid_params() {
        let mut snapshot = Session::new(1).snapshot();
        let json = r#"{"max_entry":2,"target":100,"misere":false,"hard_mode":true}"#;
        snapshot.params = serde_json::from_str(json).unwrap();

        assert_eq!(Session::restore(snapshot).err(), Some(NimError::InvalidMaxEntry(2)));
    }

    fn state_from_json(json: &str) -> GameState {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_restore_rejects_forged_state() {
        // Illegal factor, wrong side, and products that disagree with history.
        let mut snapshot = Session::new(1).snapshot();
        snapshot.state = state_from_json(
            r#"{"product":5000,"history":[{"side":"Computer","factor":50,"product":7}],"phase":"InProgress"}"#,
        );
        assert!(matches!(
            Session::restore(snapshot),
            Err(NimError::InvalidSnapshot(_))
        ));

        // Legal moves, but the game is over and still marked in progress.
        let mut snapshot = Session::new(1).snapshot();
        snapshot.state = state_from_json(
            r#"{"product":1458,"history":[
                {"side":"Human","factor":9,"product":9},
                {"side":"Computer","factor":9,"product":81},
                {"side":"Human","factor":9,"product":729},
                {"side":"Computer","factor":2,"product":1458}
            ],"phase":"InProgress"}"#,
        );
        assert!(matches!(
            Session::restore(snapshot),
            Err(NimError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_restored_terminal_game_stays_over() {
        let mut session = Session::with_parameters(GameParameters::custom(9, 8).unwrap(), 3);
        session.start();
        session.submit_human_move(8).unwrap();

        let bytes = session.snapshot().to_bytes().unwrap();
        let mut restored = Session::restore(SessionSnapshot::from_bytes(&bytes).unwrap()).unwrap();

        assert_eq!(restored.phase(), Phase::Terminal);
        assert_eq!(restored.submit_human_move(2), Err(NimError::GameOver));
        assert_eq!(restored.history(), vec![8]);
    }

    #[test]
    fn test_restore_rejects_params_not_matching_settings() {
        let mut snapshot = Session::new(1).snapshot();
        snapshot.params = GameParameters::custom(5, 100).unwrap();

        assert!(matches!(
            Session::restore(snapshot),
            Err(NimError::InvalidSnapshot(_))
        ));
    }
}
