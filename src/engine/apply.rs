use thiserror::Error;

use crate::board::Board;
use crate::rules::{flips_for, legal_moves_mask};
use crate::state::GameState;
use crate::types::{rc_to_idx, Action, Player};

/// An action outside the current legal set. Never silently corrected: an
/// agent producing one of these is a programming defect.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveError {
    #[error("cell ({row}, {col}) is off the board")]
    OutOfRange { row: u8, col: u8 },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("placement at ({row}, {col}) captures no discs")]
    NoCapture { row: u8, col: u8 },

    #[error("pass is illegal while placements are available")]
    PassWithPlacements,
}

/// Apply an action as a pure transform: returns a new `GameState` on success.
///
/// A placement flips every captured run in every direction and hands the turn
/// over; a pass only hands the turn over, and is legal solely when the mover
/// has no capturing placement. The move counter advances for both.
pub fn apply_action(state: &GameState, action: Action) -> Result<GameState, IllegalMoveError> {
    let mover = state.to_move();
    let (own, opp) = state.mover_bits();

    match action {
        Action::Pass => {
            if legal_moves_mask(own, opp) != 0 {
                return Err(IllegalMoveError::PassWithPlacements);
            }
            Ok(GameState::from_parts(
                state.board,
                mover.other(),
                state.move_count().saturating_add(1),
            ))
        }
        Action::Place { row, col } => {
            let Some(idx) = rc_to_idx(row, col) else {
                return Err(IllegalMoveError::OutOfRange { row, col });
            };
            let bit = 1u64 << idx;
            if bit & (own | opp) != 0 {
                return Err(IllegalMoveError::Occupied { row, col });
            }
            if bit & legal_moves_mask(own, opp) == 0 {
                return Err(IllegalMoveError::NoCapture { row, col });
            }

            let flips = flips_for(bit, own, opp);
            debug_assert_ne!(flips, 0, "a legal placement must capture");

            let own = own | bit | flips;
            let opp = opp ^ flips;
            let board = match mover {
                Player::Black => Board::from_masks(own, opp),
                Player::White => Board::from_masks(opp, own),
            };
            Ok(GameState::from_parts(
                board,
                mover.other(),
                state.move_count().saturating_add(1),
            ))
        }
    }
}
