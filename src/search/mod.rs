//! Adversarial search.
//!
//! ## Overview
//!
//! - **Minimax**: exhaustive search over the full game tree, no pruning
//! - **Deterministic**: ties go to the first move in enumeration order
//! - **Policies**: minimax and seeded-random move choosers
//! - **Self-play**: drive complete games between two policies
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::games::tictactoe::{initial_state, TicTacToe};
//! use rust_ttt::rules::Outcome;
//! use rust_ttt::search::{play_out, Minimax, MinimaxPolicy, SearchConfig};
//!
//! let mut search = Minimax::new(TicTacToe, SearchConfig::default());
//! let evaluation = search.evaluate(&initial_state());
//! assert_eq!(evaluation.value, 0);
//!
//! let mut x = MinimaxPolicy::new(TicTacToe, SearchConfig::default());
//! let mut o = MinimaxPolicy::new(TicTacToe, SearchConfig::default());
//! let game = play_out(&TicTacToe, initial_state(), &mut x, &mut o);
//! assert_eq!(game.outcome, Outcome::Draw);
//! ```

pub mod config;
pub mod minimax;
pub mod playout;
pub mod policy;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{Evaluation, Minimax, Role};
pub use playout::{play_out, Playout};
pub use policy::{MinimaxPolicy, MovePolicy, RandomPolicy};
pub use stats::SearchStats;
