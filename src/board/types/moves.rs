//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::Piece;
use super::square::Square;

/// Special-move classification. The kinds are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    #[default]
    Normal,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// A move, carrying everything needed to apply and revert it.
///
/// Besides the squares, a move records the moving piece, the captured piece
/// (if any), the promotion piece (if any) and its [`MoveKind`]. Reverting a
/// move needs nothing else apart from the [`Memento`](crate::board::Memento)
/// taken when it was made.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    promotion: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Placeholder move (a1a1 pawn), used to fill empty list slots
    pub const NULL: Move = Move::new(Square::A1, Square::A1, Piece::Pawn);

    /// A plain move of `piece` with no capture or special flag.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            kind: MoveKind::Normal,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_capture(mut self, captured: Piece) -> Self {
        self.captured = Some(captured);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(mut self, promotion: Piece) -> Self {
        self.promotion = Some(promotion);
        self
    }

    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move {
            kind: MoveKind::DoublePawnPush,
            ..Move::new(from, to, Piece::Pawn)
        }
    }

    /// En passant capture; the captured pawn is not on `to`.
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            captured: Some(Piece::Pawn),
            kind: MoveKind::EnPassant,
            ..Move::new(from, to, Piece::Pawn)
        }
    }

    /// King move of a castle; the rook move is implied.
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        let kind = match side {
            CastleSide::Kingside => MoveKind::CastleKingside,
            CastleSide::Queenside => MoveKind::CastleQueenside,
        };
        Move {
            kind,
            ..Move::new(from, to, Piece::King)
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece that moves (a pawn for promotions)
    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::CastleKingside => Some(CastleSide::Kingside),
            MoveKind::CastleQueenside => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.kind, MoveKind::DoublePawnPush)
    }

    /// Square of the captured piece, which differs from `to` for en passant.
    #[inline]
    #[must_use]
    pub(crate) const fn capture_square(self) -> Square {
        if self.is_en_passant() {
            Square::new(self.from.rank(), self.to.file())
        } else {
            self.to
        }
    }

    /// Piece standing on `to` after the move.
    #[inline]
    #[must_use]
    pub(crate) const fn landing_piece(self) -> Piece {
        match self.promotion {
            Some(p) => p,
            None => self.piece,
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NULL
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self, self.piece.to_char())?;
        if let Some(captured) = self.captured {
            write!(f, "x{}", captured.to_char())?;
        }
        match self.kind {
            MoveKind::Normal => {}
            MoveKind::DoublePawnPush => write!(f, " dpp")?,
            MoveKind::EnPassant => write!(f, " ep")?,
            MoveKind::CastleKingside => write!(f, " O-O")?,
            MoveKind::CastleQueenside => write!(f, " O-O-O")?,
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: [Move::NULL; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES);
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Move] {
        &mut self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over a [`MoveList`].
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for mv in iter {
            list.push(mv);
        }
        list
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Move {
        &self.as_slice()[idx]
    }
}
