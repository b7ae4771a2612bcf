//! Self-play: drive a game to the end with one policy per player.

use tracing::{debug, trace, warn};

use crate::core::{MoveRecord, Player};
use crate::rules::{Outcome, Rules};

use super::policy::MovePolicy;

/// A finished game.
#[derive(Clone, Debug)]
pub struct Playout<R: Rules> {
    /// Moves in the order they were played.
    pub moves: Vec<MoveRecord<R::Move>>,

    /// Position the game ended in.
    pub final_state: R::State,

    pub outcome: Outcome,
}

impl<R: Rules> Playout<R> {
    /// Number of half-moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Play from `start` until the game is over.
///
/// The player to move is asked for a move each ply: `x` for X, `o` for O. A
/// policy with no move on an unfinished position ends the game as a draw, and
/// so does a policy that picks a move outside [`Rules::legal_moves`]. The
/// illegal move is not applied or recorded.
pub fn play_out<R, PX, PO>(rules: &R, start: R::State, x: &mut PX, o: &mut PO) -> Playout<R>
where
    R: Rules,
    PX: MovePolicy<R> + ?Sized,
    PO: MovePolicy<R> + ?Sized,
{
    let mut state = start;
    let mut moves = Vec::new();

    let outcome = loop {
        if let Some(outcome) = rules.outcome(&state) {
            break outcome;
        }

        let player = rules.to_move(&state);
        let choice = match player {
            Player::X => x.choose(&state),
            Player::O => o.choose(&state),
        };

        let Some(mv) = choice else {
            warn!(%player, ply = moves.len(), "policy returned no move; scoring as draw");
            break Outcome::Draw;
        };

        if !rules.legal_moves(&state).as_ref().contains(&mv) {
            warn!(
                %player,
                %mv,
                ply = moves.len(),
                "policy returned an illegal move; scoring as draw"
            );
            break Outcome::Draw;
        }

        let ply = moves.len() as u32;
        trace!(%player, %mv, ply, "move played");
        state = rules.successor(&state, mv);
        moves.push(MoveRecord::new(player, mv, ply));
    };

    debug!(%outcome, plies = moves.len(), "playout finished");

    Playout {
        moves,
        final_state: state,
        outcome,
    }
}
