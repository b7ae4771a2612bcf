//! Cell contents.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this mark, `None` for an empty cell.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Symbol used in board text. Empty cells render as `.`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a board-text symbol.
    ///
    /// Marks are case-insensitive; `.`, `_` and `-` all denote an empty cell.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::default().player(), None);
    }

    #[test]
    fn test_symbol_roundtrip() {
        for cell in [Cell::Empty, Cell::X, Cell::O] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
    }

    #[test]
    fn test_from_symbol_variants() {
        assert_eq!(Cell::from_symbol('x'), Some(Cell::X));
        assert_eq!(Cell::from_symbol('o'), Some(Cell::O));
        assert_eq!(Cell::from_symbol('_'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('-'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('0'), None);
        assert_eq!(Cell::from_symbol(' '), None);
    }

    #[test]
    fn test_from_player() {
        assert_eq!(Cell::from(Player::X), Cell::X);
        assert_eq!(Cell::from(Player::O), Cell::O);
    }
}
