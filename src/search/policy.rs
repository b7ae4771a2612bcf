//! Move policies: strategies that pick a move for the player to move.
//!
//! - `MinimaxPolicy`: optimal play via [`Minimax`]
//! - `RandomPolicy`: uniformly random legal move from a seeded RNG

use crate::core::GameRng;
use crate::rules::Rules;

use super::config::SearchConfig;
use super::minimax::Minimax;

/// Strategy choosing a move for the player to move.
pub trait MovePolicy<R: Rules> {
    /// Choose a move in `state`.
    ///
    /// Returns `None` if no legal move exists.
    fn choose(&mut self, state: &R::State) -> Option<R::Move>;
}

/// Plays the minimax move.
#[derive(Clone, Debug)]
pub struct MinimaxPolicy<R: Rules> {
    search: Minimax<R>,
}

impl<R: Rules> MinimaxPolicy<R> {
    pub fn new(rules: R, config: SearchConfig) -> Self {
        Self {
            search: Minimax::new(rules, config),
        }
    }

    /// The underlying searcher, including stats of the last decision.
    pub fn search(&self) -> &Minimax<R> {
        &self.search
    }
}

impl<R: Rules> MovePolicy<R> for MinimaxPolicy<R> {
    fn choose(&mut self, state: &R::State) -> Option<R::Move> {
        self.search.search(state)
    }
}

/// Plays a uniformly random legal move.
///
/// Deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct RandomPolicy<R: Rules> {
    rules: R,
    rng: GameRng,
}

impl<R: Rules> RandomPolicy<R> {
    pub fn new(rules: R, seed: u64) -> Self {
        Self {
            rules,
            rng: GameRng::new(seed),
        }
    }
}

impl<R: Rules> MovePolicy<R> for RandomPolicy<R> {
    fn choose(&mut self, state: &R::State) -> Option<R::Move> {
        if self.rules.is_terminal(state) {
            return None;
        }
        let moves = self.rules.legal_moves(state);
        self.rng.choose(moves.as_ref()).copied()
    }
}
