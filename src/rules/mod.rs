//! Rules trait for game implementations.
//!
//! Games implement `Rules` to define:
//! - Turn order and legal moves
//! - How moves transform the state
//! - Terminal detection and outcome
//!
//! The search calls into `Rules` but never interprets game-specific
//! concepts directly.

pub mod engine;

pub use engine::{Outcome, Rules};
