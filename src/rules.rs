//! Mask-level move generation and capture rules.
//!
//! Everything here operates on raw (mover, opponent) bitmask pairs so the
//! same routines serve both colors and both the engine and the evaluator.

use crate::board::{shift, Dir};

/// Bitmask of every legal placement for the mover.
///
/// Directional fill: for each ray direction, grow a run of opponent discs
/// seeded from the mover's discs, then land on the empty cell beyond it.
/// Six doubling steps suffice on an 8-wide board.
#[inline]
pub fn legal_moves_mask(own: u64, opp: u64) -> u64 {
    let empty = !(own | opp);
    let mut moves = 0u64;
    for dir in Dir::all() {
        let mut run = shift(own, dir) & opp;
        for _ in 0..5 {
            run |= shift(run, dir) & opp;
        }
        moves |= shift(run, dir) & empty;
    }
    moves
}

/// Every opponent disc captured by placing the mover's disc on `move_bit`.
///
/// A run counts only when it is terminated by one of the mover's own discs;
/// a run ending on an empty cell or the board edge captures nothing.
#[inline]
pub fn flips_for(move_bit: u64, own: u64, opp: u64) -> u64 {
    debug_assert_eq!(move_bit.count_ones(), 1);
    debug_assert_eq!(move_bit & (own | opp), 0, "placement cell must be empty");
    let mut flips = 0u64;
    for dir in Dir::all() {
        let mut run = 0u64;
        let mut cursor = shift(move_bit, dir);
        while cursor & opp != 0 {
            run |= cursor;
            cursor = shift(cursor, dir);
        }
        if cursor & own != 0 {
            flips |= run;
        }
    }
    flips
}

#[inline]
pub fn has_any_move(own: u64, opp: u64) -> bool {
    legal_moves_mask(own, opp) != 0
}

/// Standard end condition: board full, or neither side can place.
#[inline]
pub fn terminal(black: u64, white: u64) -> bool {
    if (black | white) == u64::MAX {
        return true;
    }
    !has_any_move(black, white) && !has_any_move(white, black)
}
