use std::fmt;

use crate::board::Board;
use crate::rules::{legal_moves_mask, terminal};
use crate::types::{Action, Player};

/// Immutable game snapshot: board, player to move, moves played so far.
///
/// The whole state is two bitmasks plus two scalars, so search trees copy it
/// freely; applying an action always produces a fresh state and never touches
/// the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    to_move: Player,
    move_count: u8,
}

impl GameState {
    /// Standard starting position, black to move.
    #[inline]
    pub fn initial() -> Self {
        Self {
            board: Board::starting(),
            to_move: Player::Black,
            move_count: 0,
        }
    }

    #[inline]
    pub fn from_parts(board: Board, to_move: Player, move_count: u8) -> Self {
        Self {
            board,
            to_move,
            move_count,
        }
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// (mover bits, opponent bits) for the side to move.
    #[inline]
    pub fn mover_bits(&self) -> (u64, u64) {
        let own = self.board.bits(self.to_move);
        let opp = self.board.bits(self.to_move.other());
        (own, opp)
    }

    /// Ordered legal actions for the player to move.
    ///
    /// Placements ascend in row-major order; when no placement captures
    /// anything the sole action is `Pass`. The ordering is the canonical
    /// tie-break order every deterministic agent relies on.
    pub fn legal_actions(&self) -> Vec<Action> {
        let (own, opp) = self.mover_bits();
        let mut mask = legal_moves_mask(own, opp);
        if mask == 0 {
            return vec![Action::Pass];
        }
        let mut actions = Vec::with_capacity(mask.count_ones() as usize);
        while mask != 0 {
            let idx = mask.trailing_zeros() as u8;
            actions.push(Action::from_bit_index(idx));
            mask &= mask - 1;
        }
        actions
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        terminal(self.board.black(), self.board.white())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(
            f,
            "Turn: {} | Move {} | Score (B/W): {}/{}",
            self.to_move,
            self.move_count,
            self.board.count(Player::Black),
            self.board.count(Player::White),
        )
    }
}

/// Free-function mirror of the state queries, for callers that prefer them.
#[inline]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    state.legal_actions()
}

#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}
