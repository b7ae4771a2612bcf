//! # rust-ttt
//!
//! An exhaustive minimax engine for 3x3 tic-tac-toe.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Boards are `Copy` values. Nothing is mutated in
//!    place and there is no global state.
//!
//! 2. **Derived Turn Order**: Whose turn it is comes from the marks on the
//!    board, never from stored state.
//!
//! 3. **Deterministic Search**: Moves are enumerated row-major, so the
//!    search breaks ties the same way every time.
//!
//! ## Modules
//!
//! - `core`: Players, cells, moves, the board, RNG
//! - `rules`: `Rules` trait and `Outcome`
//! - `games`: The tic-tac-toe engine functions
//! - `search`: Minimax, move policies, self-play
//! - `error`: `EngineError`
//!
//! ## Example
//!
//! ```
//! use rust_ttt::{actions, initial_state, minimax, player, result, terminal};
//! use rust_ttt::core::Player;
//!
//! let board = initial_state();
//! assert_eq!(player(&board), Player::X);
//! assert_eq!(actions(&board).len(), 9);
//!
//! let mv = minimax(&board).unwrap();
//! let board = result(&board, mv).unwrap();
//! assert_eq!(player(&board), Player::O);
//! assert!(!terminal(&board));
//! ```

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, Move, MoveRecord, Player};

pub use crate::error::{EngineError, InvalidMoveReason, Result};

pub use crate::rules::{Outcome, Rules};

pub use crate::games::tictactoe::{
    actions, initial_state, minimax, outcome, player, result, terminal, utility, winner,
    winning_line, TicTacToe, WinningLine,
};

pub use crate::search::{
    play_out, Evaluation, Minimax, MinimaxPolicy, MovePolicy, Playout, RandomPolicy, Role,
    SearchConfig, SearchStats,
};
