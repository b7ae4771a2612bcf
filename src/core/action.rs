//! Move representation: a `(row, col)` coordinate on the 3x3 grid.
//!
//! A `Move` is only a coordinate. The mark written by a move is never part
//! of it; the engine derives it from the board the move is applied to.

use serde::{Deserialize, Serialize};

use super::board::SIZE;
use super::player::Player;

/// A board coordinate identifying the cell to fill.
///
/// Both `row` and `col` must be in `0..3` for the move to be playable.
/// Out-of-range moves can be constructed but are rejected by
/// [`crate::games::tictactoe::result`].
///
/// ## Example
///
/// ```
/// use rust_ttt::core::Move;
///
/// let center = Move::new(1, 1);
/// assert_eq!(center.index(), Some(4));
/// assert_eq!(Move::from_index(4), Some(center));
///
/// assert_eq!(Move::new(3, 0).index(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move for the given row-major cell index, `None` if out of range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SIZE * SIZE {
            Some(Self::new(index / SIZE, index % SIZE))
        } else {
            None
        }
    }

    /// Check whether the move lies inside the grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major cell index, `None` if out of range.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row * SIZE + self.col)
        } else {
            None
        }
    }

    /// Every coordinate on the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..SIZE * SIZE).map(|i| Move::new(i / SIZE, i % SIZE))
    }

    /// Check whether this is one of the four corners.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == SIZE - 1) && (self.col == 0 || self.col == SIZE - 1)
    }

    /// Check whether this is the center cell.
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == SIZE / 2 && self.col == SIZE / 2
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move recorded during a playout.
///
/// `ply` counts half-moves from the start of the playout, starting at 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord<M = Move> {
    /// The player who made the move.
    pub player: Player,

    /// The move made.
    pub mv: M,

    /// Half-move number within the playout.
    pub ply: u32,
}

impl<M> MoveRecord<M> {
    #[must_use]
    pub fn new(player: Player, mv: M, ply: u32) -> Self {
        Self { player, mv, ply }
    }
}
