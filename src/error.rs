//! Engine error types.

use crate::core::{Move, Player};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The target cell already holds this player's mark.
    Occupied(Player),
    /// The coordinate lies outside the 3x3 grid.
    OutOfBounds,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::Occupied(player) => write!(f, "cell is already occupied by {player}"),
            InvalidMoveReason::OutOfBounds => write!(f, "cell is outside the board"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A move was applied to a cell that cannot take it.
    #[error("invalid move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: InvalidMoveReason },

    /// Utility was requested for a game still in progress.
    #[error("board is not terminal")]
    NotTerminal,

    #[error("malformed board: {0}")]
    MalformedBoard(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidMove {
            mv: Move::new(1, 1),
            reason: InvalidMoveReason::Occupied(Player::X),
        };
        assert_eq!(
            err.to_string(),
            "invalid move (1, 1): cell is already occupied by X"
        );

        let err = EngineError::InvalidMove {
            mv: Move::new(0, 3),
            reason: InvalidMoveReason::OutOfBounds,
        };
        assert_eq!(err.to_string(), "invalid move (0, 3): cell is outside the board");

        assert_eq!(EngineError::NotTerminal.to_string(), "board is not terminal");
    }
}
