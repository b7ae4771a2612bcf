//! Exhaustive minimax search.
//!
//! A single recursive function evaluates every node, parameterized by the
//! acting [`Role`]: X maximizes the utility, O minimizes it. There is no
//! pruning and no caching; the tic-tac-toe tree is small enough to walk in
//! full.
//!
//! Ties are broken by enumeration order: a move replaces the current best
//! only if its value is strictly better, so the first of several equally
//! good moves wins. Since [`Rules::legal_moves`] is ordered, the choice is
//! reproducible.

use std::time::Instant;

use tracing::{debug, instrument, trace};

use crate::core::Player;
use crate::rules::Rules;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Side of the search acting at a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Acts for X, seeks the highest utility.
    Maximize,
    /// Acts for O, seeks the lowest utility.
    Minimize,
}

impl Role {
    /// Role acting for `player`.
    #[must_use]
    pub const fn for_player(player: Player) -> Self {
        match player {
            Player::X => Role::Maximize,
            Player::O => Role::Minimize,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Role::Maximize => Role::Minimize,
            Role::Minimize => Role::Maximize,
        }
    }

    /// Check whether `candidate` is strictly better than `best` for this role.
    #[must_use]
    pub const fn prefers(self, candidate: i8, best: i8) -> bool {
        match self {
            Role::Maximize => candidate > best,
            Role::Minimize => candidate < best,
        }
    }

    /// Starting value any real score improves on.
    const fn worst(self) -> i8 {
        match self {
            Role::Maximize => i8::MIN,
            Role::Minimize => i8::MAX,
        }
    }
}

/// Minimax value of a position and the move that achieves it.
///
/// `best_move` is `None` at terminal positions and at the depth horizon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation<M> {
    /// Utility from X's point of view under optimal play.
    pub value: i8,
    pub best_move: Option<M>,
}

impl<M> Evaluation<M> {
    const fn leaf(value: i8) -> Self {
        Self {
            value,
            best_move: None,
        }
    }
}

/// Minimax search context.
///
/// Generic over the rules type. Owns the configuration and the statistics
/// of the most recent search.
///
/// ```
/// use rust_ttt::core::{Board, Move};
/// use rust_ttt::games::tictactoe::TicTacToe;
/// use rust_ttt::search::{Minimax, SearchConfig};
///
/// let board: Board = "XX./OO./...".parse().unwrap();
/// let mut search = Minimax::new(TicTacToe, SearchConfig::default());
///
/// assert_eq!(search.search(&board), Some(Move::new(0, 2)));
/// assert!(search.stats().nodes_visited > 0);
/// ```
#[derive(Clone, Debug)]
pub struct Minimax<R: Rules> {
    rules: R,
    config: SearchConfig,
    stats: SearchStats,
}

impl<R: Rules> Minimax<R> {
    pub fn new(rules: R, config: SearchConfig) -> Self {
        Self {
            rules,
            config,
            stats: SearchStats::default(),
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the player to move, `None` if the game is over.
    pub fn search(&mut self, state: &R::State) -> Option<R::Move> {
        self.evaluate(state).best_move
    }

    /// Minimax value of `state` together with the chosen root move.
    #[instrument(level = "debug", skip_all)]
    pub fn evaluate(&mut self, state: &R::State) -> Evaluation<R::Move> {
        let start = Instant::now();
        self.stats.reset();

        let role = Role::for_player(self.rules.to_move(state));
        let evaluation = evaluate_node(&self.rules, &self.config, &mut self.stats, state, role, 0);

        self.stats.time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        debug!(
            value = evaluation.value,
            best_move = ?evaluation.best_move,
            nodes = self.stats.nodes_visited,
            terminal_nodes = self.stats.terminal_nodes,
            time_us = self.stats.time_us,
            "minimax search complete"
        );

        evaluation
    }

    /// Minimax value of every legal root move, in enumeration order.
    ///
    /// Empty when the game is over.
    #[instrument(level = "debug", skip_all)]
    pub fn score_moves(&mut self, state: &R::State) -> Vec<(R::Move, i8)> {
        let start = Instant::now();
        self.stats.reset();
        self.stats.visit(0);

        if self.rules.is_terminal(state) {
            self.stats.terminal_nodes += 1;
            return Vec::new();
        }

        let child_role = Role::for_player(self.rules.to_move(state)).opposite();
        let scores: Vec<_> = self
            .rules
            .legal_moves(state)
            .into_iter()
            .map(|mv| {
                let child = self.rules.successor(state, mv);
                let value =
                    evaluate_node(&self.rules, &self.config, &mut self.stats, &child, child_role, 1)
                        .value;
                trace!(%mv, value, "root move scored");
                (mv, value)
            })
            .collect();

        self.stats.time_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
        debug!(
            moves = scores.len(),
            nodes = self.stats.nodes_visited,
            time_us = self.stats.time_us,
            "root moves scored"
        );

        scores
    }
}

/// Evaluate `state` with `role` acting, `depth` plies below the root.
fn evaluate_node<R: Rules>(
    rules: &R,
    config: &SearchConfig,
    stats: &mut SearchStats,
    state: &R::State,
    role: Role,
    depth: u32,
) -> Evaluation<R::Move> {
    stats.visit(depth);

    if let Some(outcome) = rules.outcome(state) {
        stats.terminal_nodes += 1;
        return Evaluation::leaf(outcome.utility());
    }

    if config.at_horizon(depth) {
        stats.horizon_cutoffs += 1;
        return Evaluation::leaf(0);
    }

    let mut best = Evaluation::leaf(role.worst());
    for mv in rules.legal_moves(state) {
        let child = rules.successor(state, mv);
        let value = evaluate_node(rules, config, stats, &child, role.opposite(), depth + 1).value;
        if role.prefers(value, best.value) {
            best = Evaluation {
                value,
                best_move: Some(mv),
            };
        }
    }

    // Stuck but not finished: score as a draw.
    if best.best_move.is_none() {
        best.value = 0;
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Move};
    use crate::games::tictactoe::TicTacToe;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn search() -> Minimax<TicTacToe> {
        Minimax::new(TicTacToe, SearchConfig::default())
    }

    #[test]
    fn test_role_for_player() {
        assert_eq!(Role::for_player(Player::X), Role::Maximize);
        assert_eq!(Role::for_player(Player::O), Role::Minimize);
        assert_eq!(Role::Maximize.opposite(), Role::Minimize);
    }

    #[test]
    fn test_role_prefers_is_strict() {
        assert!(Role::Maximize.prefers(1, 0));
        assert!(!Role::Maximize.prefers(0, 0));
        assert!(Role::Minimize.prefers(-1, 0));
        assert!(!Role::Minimize.prefers(0, 0));
        assert!(Role::Maximize.prefers(-1, Role::Maximize.worst()));
        assert!(Role::Minimize.prefers(1, Role::Minimize.worst()));
    }

    #[test]
    fn test_terminal_root() {
        let mut search = search();
        let evaluation = search.evaluate(&board("XXX/OO./..."));

        assert_eq!(evaluation, Evaluation { value: 1, best_move: None });
        assert_eq!(search.stats().nodes_visited, 1);
        assert_eq!(search.stats().terminal_nodes, 1);
    }

    #[test]
    fn test_one_move_left() {
        // Only (2, 2) is empty; X to move and X completes the diagonal.
        let mut search = search();
        let evaluation = search.evaluate(&board("XOO/OXX/XO."));

        assert_eq!(evaluation.best_move, Some(Move::new(2, 2)));
        assert_eq!(evaluation.value, 1);
        assert_eq!(search.stats().nodes_visited, 2);
        assert_eq!(search.stats().max_depth, 1);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut search = search();
        let evaluation = search.evaluate(&Board::empty());

        assert_eq!(evaluation.value, 0);
        // Every opening draws, so the first one in row-major order is kept.
        assert_eq!(evaluation.best_move, Some(Move::new(0, 0)));
        assert_eq!(search.stats().horizon_cutoffs, 0);
        assert_eq!(search.stats().max_depth, 9);
    }

    #[test]
    fn test_search_records_time() {
        let mut search = search();
        search.evaluate(&Board::empty());

        let stats = search.stats();
        assert!(stats.time_us < u64::MAX);
        assert!(stats.nodes_per_second() >= 0.0);
        assert!(stats.nodes_per_second().is_finite());
    }

    #[test]
    fn test_search_is_repeatable() {
        let b = board("X../.O./...");
        let mut search = search();

        let first = search.evaluate(&b);
        let first_stats = search.stats().nodes_visited;
        let second = search.evaluate(&b);

        assert_eq!(first, second);
        assert_eq!(search.stats().nodes_visited, first_stats);
    }

    #[test]
    fn test_depth_limit_scores_horizon_as_draw() {
        // X wins in three plies at best, beyond a one-ply horizon.
        let mut search = Minimax::new(TicTacToe, SearchConfig::default().with_max_depth(1));
        let evaluation = search.evaluate(&Board::empty());

        assert_eq!(evaluation.value, 0);
        assert_eq!(search.stats().horizon_cutoffs, 9);
        assert_eq!(search.stats().nodes_visited, 10);
        assert_eq!(search.stats().max_depth, 1);
    }

    #[test]
    fn test_depth_limit_still_sees_immediate_win() {
        let mut search = Minimax::new(TicTacToe, SearchConfig::default().with_max_depth(1));
        assert_eq!(search.search(&board("XX./OO./...")), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_score_moves() {
        let mut search = search();
        let scores = search.score_moves(&board("XX./OO./..."));

        // Blocking row 1 holds the draw; the rest let O complete it.
        assert_eq!(
            scores,
            vec![
                (Move::new(0, 2), 1),
                (Move::new(1, 2), 0),
                (Move::new(2, 0), -1),
                (Move::new(2, 1), -1),
                (Move::new(2, 2), -1),
            ]
        );
    }

    #[test]
    fn test_score_moves_terminal() {
        let mut search = search();
        assert!(search.score_moves(&board("XOX/XOO/OXX")).is_empty());
    }
}
