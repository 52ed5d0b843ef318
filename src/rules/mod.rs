//! Turn rules.
//!
//! `NimRules` defines:
//! - How a factor modifies state
//! - When the game ends
//! - Who won
//!
//! The session calls into `NimRules` but never re-derives these itself.

pub mod engine;

pub use engine::{GameResult, NimRules};
