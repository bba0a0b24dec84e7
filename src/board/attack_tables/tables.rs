//! Precomputed per-square tables for jumping pieces and sliding rays.

use once_cell::sync::Lazy;

use crate::board::{Bitboard, Color, Square};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Ray directions: the first four are orthogonal, the last four diagonal.
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Square::all() {
        table[sq.index()] = deltas
            .iter()
            .filter_map(|&(dr, df)| sq.offset(dr, df))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// Squares a pawn of the given color attacks from each square.
pub(crate) static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    for color in Color::BOTH {
        let dr = color.pawn_direction();
        table[color.index()] = leaper_table(&[(dr, -1), (dr, 1)]);
    }
    table
});

/// Squares walked from an origin in one direction, nearest first.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Ray {
    squares: [Square; 7],
    len: u8,
}

impl Ray {
    #[inline]
    pub(crate) fn squares(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

pub(crate) static RAYS: Lazy<[[Ray; 8]; 64]> = Lazy::new(|| {
    let mut rays = [[Ray::default(); 8]; 64];
    for sq in Square::all() {
        for (dir, &(dr, df)) in DIRECTIONS.iter().enumerate() {
            let ray = &mut rays[sq.index()][dir];
            let mut cursor = sq.offset(dr, df);
            while let Some(next) = cursor {
                ray.squares[ray.len as usize] = next;
                ray.len += 1;
                cursor = next.offset(dr, df);
            }
        }
    }
    rays
});
