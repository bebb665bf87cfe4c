use crate::state::GameState;
use crate::types::Player;

/// Disc tally as (black, white).
#[inline]
pub fn score(state: &GameState) -> (u8, u8) {
    (
        state.board.count(Player::Black),
        state.board.count(Player::White),
    )
}

/// Signed disc difference from `perspective`.
#[inline]
pub fn disc_diff(state: &GameState, perspective: Player) -> i16 {
    let (b, w) = score(state);
    let diff = i16::from(b) - i16::from(w);
    match perspective {
        Player::Black => diff,
        Player::White => -diff,
    }
}

/// Side with more discs, `None` on a draw.
#[inline]
pub fn winner(state: &GameState) -> Option<Player> {
    let (b, w) = score(state);
    match b.cmp(&w) {
        std::cmp::Ordering::Greater => Some(Player::Black),
        std::cmp::Ordering::Less => Some(Player::White),
        std::cmp::Ordering::Equal => None,
    }
}

/// Win/draw/loss value from `perspective`: +1.0, 0.0 or -1.0.
#[inline]
pub fn outcome(state: &GameState, perspective: Player) -> f32 {
    match winner(state) {
        Some(p) if p == perspective => 1.0,
        Some(_) => -1.0,
        None => 0.0,
    }
}
