//! Tic-tac-toe on a 3x3 grid.
//!
//! The engine surface is a set of pure functions over [`Board`]:
//!
//! - [`initial_state`]: the empty board
//! - [`player`]: whose turn it is
//! - [`actions`]: legal moves, row-major
//! - [`result`]: apply a move, yielding a new board
//! - [`winner`], [`winning_line`], [`terminal`], [`outcome`]: end-of-game detection
//! - [`utility`]: score of a finished game
//! - [`minimax`]: optimal move by exhaustive search
//!
//! [`TicTacToe`] exposes the same rules through the [`crate::rules::Rules`]
//! trait for use with [`crate::search`].
//!
//! [`Board`]: crate::core::Board

mod game;

pub use game::{
    actions, initial_state, minimax, outcome, player, result, terminal, utility, winner,
    winning_line, Actions, TicTacToe, WinningLine,
};
