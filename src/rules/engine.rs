//! Rules trait for two-player, zero-sum games.
//!
//! Games implement `Rules` to define:
//! - Whose turn it is
//! - What moves are legal
//! - How a move transforms the state
//! - When the game is over, and how it ended

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::error::{EngineError, Result};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(Player),
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// The winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }

    /// Score from X's point of view: 1 if X won, -1 if O won, 0 on a draw.
    #[must_use]
    pub const fn utility(self) -> i8 {
        match self {
            Outcome::Winner(Player::X) => 1,
            Outcome::Winner(Player::O) => -1,
            Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Rules of a two-player, zero-sum, perfect-information game.
///
/// The search in [`crate::search`] is written against this trait and never
/// looks inside the state.
///
/// ## Implementation Notes
///
/// - `legal_moves`: must be deterministic, the search breaks ties by order
/// - `successor`: must not mutate its input
/// - `outcome`: return `None` while the game continues
pub trait Rules {
    /// Game position.
    type State: Clone + std::fmt::Debug;

    /// A move in this game.
    type Move: Copy + Eq + std::fmt::Debug + std::fmt::Display;

    /// Collection returned by `legal_moves`.
    type Moves: IntoIterator<Item = Self::Move> + AsRef<[Self::Move]>;

    /// Player to move in `state`.
    fn to_move(&self, state: &Self::State) -> Player;

    /// Legal moves in `state`, in a fixed order.
    ///
    /// Empty when no move is available.
    fn legal_moves(&self, state: &Self::State) -> Self::Moves;

    /// State after the player to move plays `mv`.
    ///
    /// `mv` must come from `legal_moves(state)`.
    fn successor(&self, state: &Self::State, mv: Self::Move) -> Self::State;

    /// How the game ended, or `None` if it continues.
    fn outcome(&self, state: &Self::State) -> Option<Outcome>;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool {
        self.outcome(state).is_some()
    }

    /// Score of a finished game from X's point of view.
    ///
    /// Fails with [`EngineError::NotTerminal`] while the game continues.
    fn utility(&self, state: &Self::State) -> Result<i8> {
        self.outcome(state)
            .map(Outcome::utility)
            .ok_or(EngineError::NotTerminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_winner() {
        let result = Outcome::Winner(Player::O);
        assert!(!result.is_winner(Player::X));
        assert!(result.is_winner(Player::O));

        let draw = Outcome::Draw;
        assert!(!draw.is_winner(Player::X));
        assert!(!draw.is_winner(Player::O));
        assert_eq!(draw.winner(), None);
    }

    #[test]
    fn test_outcome_utility() {
        assert_eq!(Outcome::Winner(Player::X).utility(), 1);
        assert_eq!(Outcome::Winner(Player::O).utility(), -1);
        assert_eq!(Outcome::Draw.utility(), 0);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Player::X).to_string(), "X wins");
        assert_eq!(Outcome::Draw.to_string(), "draw");
    }
}
