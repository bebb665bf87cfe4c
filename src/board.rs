use std::fmt;

use crate::types::{rc_to_idx, Player, BOARD_SIZE};

// File masks for shifts that would wrap across board edges.
const A_FILE: u64 = 0x0101_0101_0101_0101;
const H_FILE: u64 = 0x8080_8080_8080_8080;
const NOT_A_FILE: u64 = !A_FILE;
const NOT_H_FILE: u64 = !H_FILE;

/// Corner cells a1, h1, a8, h8.
pub const CORNER_MASK: u64 = 0x8100_0000_0000_0081;

/// One of the eight ray directions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Dir {
    #[inline]
    pub fn all() -> [Dir; 8] {
        [
            Dir::North,
            Dir::South,
            Dir::East,
            Dir::West,
            Dir::NorthEast,
            Dir::NorthWest,
            Dir::SouthEast,
            Dir::SouthWest,
        ]
    }
}

/// Shift every set bit one cell along `dir`; bits leaving the board vanish.
///
/// North is toward row 0 (bit indices decrease), east toward higher columns.
#[inline]
pub fn shift(bb: u64, dir: Dir) -> u64 {
    match dir {
        Dir::North => bb >> 8,
        Dir::South => bb << 8,
        Dir::East => (bb & NOT_H_FILE) << 1,
        Dir::West => (bb & NOT_A_FILE) >> 1,
        Dir::NorthEast => (bb & NOT_H_FILE) >> 7,
        Dir::NorthWest => (bb & NOT_A_FILE) >> 9,
        Dir::SouthEast => (bb & NOT_H_FILE) << 9,
        Dir::SouthWest => (bb & NOT_A_FILE) << 7,
    }
}

/// Two-bitmask Othello board. Invariant: the masks never overlap.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Board {
    /// Standard starting position: black on d5/e4, white on d4/e5.
    #[inline]
    pub fn starting() -> Self {
        let black = (1u64 << 28) | (1u64 << 35);
        let white = (1u64 << 27) | (1u64 << 36);
        Self { black, white }
    }

    #[inline]
    pub fn from_masks(black: u64, white: u64) -> Self {
        debug_assert_eq!(black & white, 0, "disc masks must not overlap");
        Self { black, white }
    }

    #[inline]
    pub fn black(&self) -> u64 {
        self.black
    }

    #[inline]
    pub fn white(&self) -> u64 {
        self.white
    }

    #[inline]
    pub fn bits(&self, player: Player) -> u64 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    #[inline]
    pub fn occupied(&self) -> u64 {
        self.black | self.white
    }

    #[inline]
    pub fn empties(&self) -> u64 {
        !self.occupied()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied() == u64::MAX
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.occupied().count_ones() as u8
    }

    #[inline]
    pub fn count(&self, player: Player) -> u8 {
        self.bits(player).count_ones() as u8
    }

    #[inline]
    pub fn disc_at(&self, row: u8, col: u8) -> Option<Player> {
        let idx = rc_to_idx(row, col)?;
        let bit = 1u64 << idx;
        if self.black & bit != 0 {
            Some(Player::Black)
        } else if self.white & bit != 0 {
            Some(Player::White)
        } else {
            None
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("black", &format_args!("{:#018x}", self.black))
            .field("white", &format_args!("{:#018x}", self.white))
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", char::from(b'a' + c))?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{} ", r + 1)?;
            for c in 0..BOARD_SIZE {
                let cell = match self.disc_at(r, c) {
                    Some(Player::Black) => 'B',
                    Some(Player::White) => 'W',
                    None => '.',
                };
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
