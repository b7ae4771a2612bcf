//! Tic-tac-toe rules as pure functions over [`Board`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Move, Player, CELLS, SIZE};
use crate::error::{EngineError, InvalidMoveReason, Result};
use crate::rules::{Outcome, Rules};
use crate::search::{Minimax, SearchConfig};

/// Legal moves of a position. Never holds more than nine moves.
pub type Actions = SmallVec<[Move; CELLS]>;

/// Winning lines as row-major indices, in detection order:
/// rows, then columns, then the main diagonal, then the anti-diagonal.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Three-in-a-row found on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [Move; 3],
}

/// Starting position: every cell empty.
#[must_use]
pub fn initial_state() -> Board {
    Board::empty()
}

/// Player whose turn it is.
///
/// X moves whenever X has not placed more marks than O, including on the
/// empty board; otherwise O moves. The rule is not validated against boards
/// that cannot arise in play.
#[must_use]
pub fn player(board: &Board) -> Player {
    let x_count = board.count(Cell::X);
    let o_count = board.count(Cell::O);

    if x_count <= o_count {
        Player::X
    } else {
        Player::O
    }
}

/// Every empty cell, in row-major order.
///
/// Empty on a full board. Callers must check [`terminal`] first when a
/// non-empty result matters.
#[must_use]
pub fn actions(board: &Board) -> Actions {
    board.empty_cells().collect()
}

/// Board after the player to move marks `mv`.
///
/// The mark is `player(board)` evaluated on the board before the move. The
/// input board is left untouched.
///
/// ```
/// use rust_ttt::games::tictactoe::{initial_state, result};
/// use rust_ttt::core::{Cell, Move};
///
/// let board = result(&initial_state(), Move::new(1, 1)).unwrap();
/// assert_eq!(board.get(Move::new(1, 1)), Some(Cell::X));
///
/// // Occupied cells are rejected.
/// assert!(result(&board, Move::new(1, 1)).is_err());
/// ```
pub fn result(board: &Board, mv: Move) -> Result<Board> {
    let index = mv.index().ok_or(EngineError::InvalidMove {
        mv,
        reason: InvalidMoveReason::OutOfBounds,
    })?;

    if let Some(owner) = board.cells()[index].player() {
        return Err(EngineError::InvalidMove {
            mv,
            reason: InvalidMoveReason::Occupied(owner),
        });
    }

    Ok(board.with_cell(index, player(board).mark()))
}

/// First three-in-a-row found, checking rows, columns, then diagonals.
#[must_use]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    LINES.iter().find_map(|&[a, b, c]| {
        let owner = cells[a].player()?;
        if cells[b] == cells[a] && cells[c] == cells[a] {
            Some(WinningLine {
                player: owner,
                cells: [a, b, c].map(|i| Move::new(i / SIZE, i % SIZE)),
            })
        } else {
            None
        }
    })
}

/// The winner, if any line is complete.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}

/// Check whether the game is over: someone won or the board is full.
#[must_use]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// How the game ended, `None` while it is still in progress.
#[must_use]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if board.is_full() => Some(Outcome::Draw),
        None => None,
    }
}

/// 1 if X won, -1 if O won, 0 on a draw.
///
/// Fails with [`EngineError::NotTerminal`] while the game is in progress.
pub fn utility(board: &Board) -> Result<i8> {
    outcome(board)
        .map(Outcome::utility)
        .ok_or(EngineError::NotTerminal)
}

/// Optimal move for the player to move, `None` on a terminal board.
///
/// Runs a full-depth minimax search. Ties between equally valued moves go to
/// the first one in row-major order.
#[must_use]
pub fn minimax(board: &Board) -> Option<Move> {
    Minimax::new(TicTacToe, SearchConfig::default()).search(board)
}

/// Tic-tac-toe as a [`Rules`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TicTacToe;

impl Rules for TicTacToe {
    type State = Board;
    type Move = Move;
    type Moves = Actions;

    fn to_move(&self, state: &Board) -> Player {
        player(state)
    }

    fn legal_moves(&self, state: &Board) -> Actions {
        actions(state)
    }

    fn successor(&self, state: &Board, mv: Move) -> Board {
        match mv.index() {
            Some(index) => state.with_cell(index, player(state).mark()),
            None => *state,
        }
    }

    fn outcome(&self, state: &Board) -> Option<Outcome> {
        outcome(state)
    }
}
