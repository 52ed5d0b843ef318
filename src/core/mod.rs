//! Core types: sides, factors, parameters, state, RNG, errors.
//!
//! Everything here is free of game policy. Rules and strategies build on
//! these types rather than modifying them.

pub mod player;
pub mod error;
pub mod config;
pub mod rng;
pub mod action;
pub mod state;

pub use player::Side;
pub use error::{NimError, NimResult};
pub use config::{GameParameters, ParameterMode, CLASSIC_MAX_ENTRY, CLASSIC_TARGET, MIN_FACTOR};
pub use rng::{GameRng, GameRngState};
pub use action::{Factor, MoveRecord};
pub use state::{GameState, Phase};
