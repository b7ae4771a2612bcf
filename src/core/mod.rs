//! Core value types: players, cells, moves, the board, and the RNG.
//!
//! Everything here is plain data. Game rules live in `games::tictactoe`.

pub mod action;
pub mod board;
pub mod cell;
pub mod player;
pub mod rng;

pub use action::{Move, MoveRecord};
pub use board::{Board, CELLS, SIZE};
pub use cell::Cell;
pub use player::Player;
pub use rng::GameRng;
