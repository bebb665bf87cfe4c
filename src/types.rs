use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;
/// Total cell count.
pub const CELLS: u8 = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A turn action: a disc placement or a forced pass.
///
/// The derived ordering is the canonical action order used everywhere for
/// deterministic tie-breaking: placements ascend row-major, and `Pass` sorts
/// after every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Place { row: u8, col: u8 },
    Pass,
}

impl Action {
    #[inline]
    pub fn place(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Action::Place { row, col }
    }

    /// 0..=63 bit index of a placement, `None` for `Pass`.
    #[inline]
    pub fn bit_index(self) -> Option<u8> {
        match self {
            Action::Place { row, col } => Some(row * BOARD_SIZE + col),
            Action::Pass => None,
        }
    }

    #[inline]
    pub fn from_bit_index(idx: u8) -> Self {
        debug_assert!(idx < CELLS);
        Action::Place {
            row: idx / BOARD_SIZE,
            col: idx % BOARD_SIZE,
        }
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        matches!(self, Action::Pass)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place { row, col } => {
                write!(f, "{}{}", char::from(b'a' + col), row + 1)
            }
            Action::Pass => write!(f, "pass"),
        }
    }
}

impl FromStr for Action {
    type Err = String;

    /// Parses `"pass"` or algebraic coordinates like `"d3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if s == "pass" {
            return Ok(Action::Pass);
        }
        let bytes = s.as_bytes();
        if bytes.len() == 2 {
            let col = bytes[0].wrapping_sub(b'a');
            let row = bytes[1].wrapping_sub(b'1');
            if row < BOARD_SIZE && col < BOARD_SIZE {
                return Ok(Action::Place { row, col });
            }
        }
        Err(format!("invalid action {s:?}, expected e.g. \"d3\" or \"pass\""))
    }
}

/// Board indexing helpers (8x8 board, bit i = row * 8 + col)
#[inline]
pub fn idx_to_rc(idx: u8) -> (u8, u8) {
    debug_assert!(idx < CELLS);
    (idx / BOARD_SIZE, idx % BOARD_SIZE)
}

#[inline]
pub fn rc_to_idx(r: u8, c: u8) -> Option<u8> {
    if r < BOARD_SIZE && c < BOARD_SIZE {
        Some(r * BOARD_SIZE + c)
    } else {
        None
    }
}
