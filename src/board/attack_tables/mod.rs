//! Lookup tables for move generation and attack detection.
//!
//! Jumping pieces (knight, king, pawn captures) use per-square target
//! bitboards. Sliding pieces walk per-square rays, nearest square first,
//! stopping at the first occupied square.

mod tables;

pub(crate) use tables::{Ray, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, RAYS};

use crate::board::{Bitboard, Piece, Square};

/// Orthogonal rays from `sq` (rook directions)
#[inline]
pub(crate) fn rook_rays(sq: Square) -> &'static [Ray] {
    &RAYS[sq.index()][..4]
}

/// Diagonal rays from `sq` (bishop directions)
#[inline]
pub(crate) fn bishop_rays(sq: Square) -> &'static [Ray] {
    &RAYS[sq.index()][4..]
}

/// Rays a slider of kind `piece` moves along.
#[inline]
pub(crate) fn slider_rays(piece: Piece, sq: Square) -> &'static [Ray] {
    match piece {
        Piece::Rook => rook_rays(sq),
        Piece::Bishop => bishop_rays(sq),
        _ => &RAYS[sq.index()][..],
    }
}

/// Squares attacked along `rays`, each ray including its first blocker.
#[inline]
pub(crate) fn ray_attacks(rays: &[Ray], occupied: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for ray in rays {
        for &sq in ray.squares() {
            attacks = attacks.with(sq);
            if occupied.contains(sq) {
                break;
            }
        }
    }
    attacks
}
