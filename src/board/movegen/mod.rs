//! Pseudo-legal move generation.
//!
//! Moves are produced by walking the side's piece list. Legality is not
//! checked here: a candidate that leaves the king attacked is rejected
//! later by [`Board::make_move`]. King moves are the exception, being
//! filtered against the opponent's attack set up front.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Bitboard, Board, Color, Move, MoveList, Piece, PieceSet, Square};

/// Per-call view of the two sides used by the piece generators.
struct GenContext<'a> {
    us: Color,
    own: &'a PieceSet,
    enemy: &'a PieceSet,
    /// Enemy pieces that may be captured (everything but the king)
    capturable: Bitboard,
    occupied: Bitboard,
}

impl GenContext<'_> {
    /// Push a move to `to` if it is empty or holds a capturable enemy piece.
    #[inline]
    fn push_to(&self, moves: &mut MoveList, piece: Piece, from: Square, to: Square) {
        if !self.occupied.contains(to) {
            moves.push(Move::new(from, to, piece));
        } else if self.capturable.contains(to) {
            if let Some(captured) = self.enemy.piece_at(to) {
                moves.push(Move::new(from, to, piece).with_capture(captured));
            }
        }
    }
}

impl Board {
    /// All pseudo-legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let us = self.side_to_move;
        let own = self.side(us);
        let enemy = self.side(us.opponent());
        let ctx = GenContext {
            us,
            own,
            enemy,
            capturable: enemy.occupied() & !enemy.bitboard(Piece::King),
            occupied: self.occupied(),
        };
        let mut moves = MoveList::new();
        for entry in own.pieces() {
            match entry.piece {
                Piece::Pawn => self.generate_pawn_moves(&ctx, entry.square, &mut moves),
                Piece::Knight => self.generate_knight_moves(&ctx, entry.square, &mut moves),
                Piece::King => self.generate_king_moves(&ctx, entry.square, &mut moves),
                slider => self.generate_slider_moves(&ctx, slider, entry.square, &mut moves),
            }
        }
        moves
    }

    /// Moves that pass the king-safety check, in generation order.
    #[must_use]
    pub fn legal_moves(&mut self) -> MoveList {
        let mut legal = MoveList::new();
        for mv in self.generate_moves() {
            if let Some(memento) = self.make_move(mv) {
                self.unmake_move(mv, memento);
                legal.push(mv);
            }
        }
        legal
    }

    /// Number of legal move sequences of length `depth`.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let mut nodes = 0;
        for mv in self.generate_moves() {
            if let Some(memento) = self.make_move(mv) {
                nodes += if depth == 1 { 1 } else { self.perft(depth - 1) };
                self.unmake_move(mv, memento);
            }
        }
        nodes
    }

    /// Per-move node counts at `depth`, for debugging move generation.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let mut counts = Vec::new();
        for mv in self.generate_moves() {
            if let Some(memento) = self.make_move(mv) {
                counts.push((mv, self.perft(depth.saturating_sub(1))));
                self.unmake_move(mv, memento);
            }
        }
        counts
    }
}
