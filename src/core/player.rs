//! The two sides of a session.
//!
//! Play always alternates starting with the human, so the side that made a
//! move is a pure function of its 0-based position in the move history.

use serde::{Deserialize, Serialize};

/// One of the two logical participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player. Always moves first.
    Human,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// Side that made the move at `index` in the history (0-based).
    ///
    /// ```
    /// use multiplicative_nim::core::Side;
    ///
    /// assert_eq!(Side::for_move(0), Side::Human);
    /// assert_eq!(Side::for_move(1), Side::Computer);
    /// assert_eq!(Side::for_move(4), Side::Human);
    /// ```
    #[must_use]
    pub const fn for_move(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Human
        } else {
            Side::Computer
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_move_alternates() {
        let sides: Vec<_> = (0..6).map(Side::for_move).collect();
        assert_eq!(
            sides,
            vec![
                Side::Human,
                Side::Computer,
                Side::Human,
                Side::Computer,
                Side::Human,
                Side::Computer,
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Human), "Human");
        assert_eq!(format!("{}", Side::Computer), "Computer");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Side::Computer).unwrap();
        let side: Side = serde_json::from_str(&json).unwrap();
        assert_eq!(side, Side::Computer);
    }
}
