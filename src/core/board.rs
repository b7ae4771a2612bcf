//! The 3x3 board.
//!
//! `Board` is a small `Copy` value. Nothing mutates a board in place: every
//! transformation returns a new one, so search can hold any number of
//! positions without sharing.
//!
//! ## Text form
//!
//! Boards print as three lines of `|`-separated symbols and parse from any
//! string holding nine cell symbols. Whitespace, `|` and `/` are ignored:
//!
//! ```
//! use rust_ttt::core::{Board, Cell, Move};
//!
//! let board: Board = "X.O/.X./..O".parse().unwrap();
//! assert_eq!(board.get(Move::new(0, 2)), Some(Cell::O));
//! assert_eq!(board.to_string(), "X|.|O\n.|X|.\n.|.|O");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::cell::Cell;
use crate::error::EngineError;

/// Side length of the grid.
pub const SIZE: usize = 3;

/// Number of cells on the grid.
pub const CELLS: usize = SIZE * SIZE;

/// Immutable 3x3 grid of cells, stored row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a board from its rows.
    #[must_use]
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut cells = [Cell::Empty; CELLS];
        for (row, values) in rows.iter().enumerate() {
            cells[row * SIZE..(row + 1) * SIZE].copy_from_slice(values);
        }
        Self { cells }
    }

    /// Cell at the given coordinate, `None` if the move is off the grid.
    #[must_use]
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.index().map(|i| self.cells[i])
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// The board as three rows.
    #[must_use]
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            rows[i / SIZE][i % SIZE] = *cell;
        }
        rows
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Check whether no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Coordinates of the empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .filter_map(|(i, _)| Move::from_index(i))
    }

    /// Copy of this board with the cell at `index` replaced.
    ///
    /// `index` must be a valid row-major index.
    #[must_use]
    pub(crate) fn with_cell(&self, index: usize, cell: Cell) -> Self {
        let mut cells = self.cells;
        cells[index] = cell;
        Self { cells }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, values) in self.rows().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}|{}|{}", values[0], values[1], values[2])?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELLS];
        let mut count = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace() && *c != '|' && *c != '/') {
            let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                EngineError::MalformedBoard(format!("unexpected symbol {symbol:?}"))
            })?;
            if count == CELLS {
                return Err(EngineError::MalformedBoard(format!(
                    "more than {CELLS} cells"
                )));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELLS {
            return Err(EngineError::MalformedBoard(format!(
                "expected {CELLS} cells, found {count}"
            )));
        }

        Ok(Self { cells })
    }
}
