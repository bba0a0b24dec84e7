//! Zobrist hashing for chess positions.
//!
//! A position's fingerprint is the XOR of one key per (piece, color, square)
//! present, the side-to-move key when black is to move, one key per granted
//! castling right and the en passant file key when a target is set.
//! `Board::make_move` toggles only the keys that change; [`Board::compute_hash`]
//! rebuilds the value from scratch for verification.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, CastleSide, CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece][square]
    piece_keys: [[[u64; 64]; 6]; 2],
    black_to_move_key: u64,
    // castling_keys[color][side]
    castling_keys: [[u64; 2]; 2],
    // only the file matters for an en passant target
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x5EED_2B0A_4D1C_7E31);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        for key in piece_keys.iter_mut().flatten().flatten() {
            *key = rng.gen();
        }
        let black_to_move_key = rng.gen();
        let mut castling_keys = [[0; 2]; 2];
        for key in castling_keys.iter_mut().flatten() {
            *key = rng.gen();
        }
        let mut en_passant_keys = [0; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }
        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][sq.index()]
    }

    #[inline]
    pub(crate) fn side_to_move(&self) -> u64 {
        self.black_to_move_key
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.file() as usize]
    }

    /// XOR of the keys of every right granted in `rights`.
    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        let mut key = 0;
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if rights.has(color, side) {
                    key ^= self.castling_keys[color.index()][side.index()];
                }
            }
        }
        key
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

impl Board {
    /// Fingerprint recomputed from scratch, for verifying the incremental one.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash = 0;
        for color in Color::BOTH {
            for entry in self.side(color).pieces() {
                hash ^= keys.piece(color, entry.piece, entry.square);
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= keys.side_to_move();
        }
        hash ^= keys.castling(self.castling);
        if let Some(ep) = self.en_passant {
            hash ^= keys.en_passant(ep);
        }
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_deterministic() {
        let a = ZobristKeys::new();
        let b = ZobristKeys::new();
        assert_eq!(a.side_to_move(), b.side_to_move());
        assert_eq!(
            a.piece(Color::Black, Piece::Queen, Square::D8),
            b.piece(Color::Black, Piece::Queen, Square::D8)
        );
    }

    #[test]
    fn test_side_to_move_changes_hash() {
        let white = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        let black = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("valid FEN");
        assert_eq!(white.hash() ^ black.hash(), ZOBRIST.side_to_move());
    }

    #[test]
    fn test_queen_key_differs_from_rook_and_bishop() {
        let keys = &*ZOBRIST;
        let q = keys.piece(Color::White, Piece::Queen, Square::D1);
        assert_ne!(q, keys.piece(Color::White, Piece::Rook, Square::D1));
        assert_ne!(q, keys.piece(Color::White, Piece::Bishop, Square::D1));
    }

    #[test]
    fn test_castling_key_of_no_rights_is_zero() {
        assert_eq!(ZOBRIST.castling(CastlingRights::none()), 0);
        assert_ne!(ZOBRIST.castling(CastlingRights::all()), 0);
    }
}
