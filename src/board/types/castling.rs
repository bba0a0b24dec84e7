//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing a castle goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Fixed squares involved in one castle.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CastlePath {
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares that must be empty between king and rook
    pub between: &'static [Square],
    /// Square the king passes over
    pub transit: Square,
}

const WHITE_KINGSIDE: CastlePath = CastlePath {
    king_from: Square::E1,
    king_to: Square::G1,
    rook_from: Square::H1,
    rook_to: Square::F1,
    between: &[Square::F1, Square::G1],
    transit: Square::F1,
};

const WHITE_QUEENSIDE: CastlePath = CastlePath {
    king_from: Square::E1,
    king_to: Square::C1,
    rook_from: Square::A1,
    rook_to: Square::D1,
    between: &[Square::B1, Square::C1, Square::D1],
    transit: Square::D1,
};

const BLACK_KINGSIDE: CastlePath = CastlePath {
    king_from: Square::E8,
    king_to: Square::G8,
    rook_from: Square::H8,
    rook_to: Square::F8,
    between: &[Square::F8, Square::G8],
    transit: Square::F8,
};

const BLACK_QUEENSIDE: CastlePath = CastlePath {
    king_from: Square::E8,
    king_to: Square::C8,
    rook_from: Square::A8,
    rook_to: Square::D8,
    between: &[Square::B8, Square::C8, Square::D8],
    transit: Square::D8,
};

#[inline]
pub(crate) const fn castle_path(color: Color, side: CastleSide) -> &'static CastlePath {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => &WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => &WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => &BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => &BLACK_QUEENSIDE,
    }
}

#[inline]
const fn castle_bit(color: Color, side: CastleSide) -> u8 {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CASTLE_WHITE_K,
        (Color::White, CastleSide::Queenside) => CASTLE_WHITE_Q,
        (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_K,
        (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_Q,
    }
}

/// Castling rights for both sides, as a bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & castle_bit(color, side) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= castle_bit(color, side);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !castle_bit(color, side);
    }

    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    /// Revoke whatever right depends on a king or rook standing on `sq`.
    ///
    /// Called for both the from and to square of every move, which covers
    /// king moves, rook moves and rooks captured on their home square.
    #[inline]
    pub(crate) fn revoke_for_square(&mut self, sq: Square) {
        match sq {
            Square::E1 => self.remove_color(Color::White),
            Square::E8 => self.remove_color(Color::Black),
            Square::H1 => self.remove(Color::White, CastleSide::Kingside),
            Square::A1 => self.remove(Color::White, CastleSide::Queenside),
            Square::H8 => self.remove(Color::Black, CastleSide::Kingside),
            Square::A8 => self.remove(Color::Black, CastleSide::Queenside),
            _ => {}
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revoke_for_rook_square_keeps_other_wing() {
        let mut rights = CastlingRights::all();
        rights.revoke_for_square(Square::H1);
        assert!(!rights.has(Color::White, CastleSide::Kingside));
        assert!(rights.has(Color::White, CastleSide::Queenside));
        assert!(rights.has(Color::Black, CastleSide::Kingside));
    }

    #[test]
    fn test_revoke_for_king_square_clears_both_wings() {
        let mut rights = CastlingRights::all();
        rights.revoke_for_square(Square::E8);
        assert!(!rights.has(Color::Black, CastleSide::Kingside));
        assert!(!rights.has(Color::Black, CastleSide::Queenside));
        assert!(rights.has(Color::White, CastleSide::Kingside));
    }
}
