//! Applying and reverting moves.
//!
//! `make_move` is where legality is decided: the move is applied, and if
//! the mover's king is left attacked the placement is reverted and `None`
//! returned. Everything else a move changes is then updated incrementally,
//! including the Zobrist fingerprint.

use super::state::Memento;
use super::types::castle_path;
use super::{Board, Color, Move, Piece};
use crate::zobrist::ZOBRIST;

impl Board {
    /// Snapshot of the fields needed to undo the next move.
    #[inline]
    #[must_use]
    pub fn memento(&self) -> Memento {
        Memento {
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            hash: self.hash,
            captured_slot: 0,
        }
    }

    /// Move pieces for `mv` made by `us`; bitboards and piece lists only.
    ///
    /// Returns the piece-list slot the captured piece was taken from.
    fn apply_placement(&mut self, mv: Move, us: Color) -> u8 {
        let them = us.opponent();
        let captured_slot = match mv.captured() {
            Some(captured) => self.sides[them.index()].remove(captured, mv.capture_square()),
            None => 0,
        };
        let own = &mut self.sides[us.index()];
        match mv.promotion() {
            Some(promotion) => own.promote(mv.from(), mv.to(), promotion),
            None => own.relocate(mv.piece(), mv.from(), mv.to()),
        }
        if let Some(side) = mv.castle_side() {
            let path = castle_path(us, side);
            own.relocate(Piece::Rook, path.rook_from, path.rook_to);
        }
        captured_slot
    }

    /// Exact inverse of [`Board::apply_placement`].
    fn revert_placement(&mut self, mv: Move, us: Color, captured_slot: u8) {
        let them = us.opponent();
        let own = &mut self.sides[us.index()];
        if let Some(side) = mv.castle_side() {
            let path = castle_path(us, side);
            own.relocate(Piece::Rook, path.rook_to, path.rook_from);
        }
        match mv.promotion() {
            Some(promotion) => own.demote(mv.from(), mv.to(), promotion),
            None => own.relocate(mv.piece(), mv.to(), mv.from()),
        }
        if let Some(captured) = mv.captured() {
            self.sides[them.index()].restore(captured, mv.capture_square(), captured_slot);
        }
    }

    /// Apply a pseudo-legal move.
    ///
    /// Returns the [`Memento`] to pass to [`Board::unmake_move`], or `None`
    /// when the move leaves the mover's king attacked. In that case the
    /// board has already been restored and no unmake is needed.
    pub fn make_move(&mut self, mv: Move) -> Option<Memento> {
        let us = self.side_to_move;
        let them = us.opponent();
        let mut memento = self.memento();

        memento.captured_slot = self.apply_placement(mv, us);
        if self.is_in_check(us) {
            self.revert_placement(mv, us, memento.captured_slot);
            return None;
        }

        let keys = &*ZOBRIST;
        let mut hash = self.hash ^ keys.side_to_move();
        hash ^= keys.piece(us, mv.piece(), mv.from());
        hash ^= keys.piece(us, mv.landing_piece(), mv.to());
        if let Some(captured) = mv.captured() {
            hash ^= keys.piece(them, captured, mv.capture_square());
        }
        if let Some(side) = mv.castle_side() {
            let path = castle_path(us, side);
            hash ^= keys.piece(us, Piece::Rook, path.rook_from);
            hash ^= keys.piece(us, Piece::Rook, path.rook_to);
        }

        let mut castling = self.castling;
        castling.revoke_for_square(mv.from());
        castling.revoke_for_square(mv.to());
        if castling != self.castling {
            hash ^= keys.castling(self.castling) ^ keys.castling(castling);
            self.castling = castling;
        }

        if let Some(old) = self.en_passant {
            hash ^= keys.en_passant(old);
        }
        self.en_passant = if mv.is_double_pawn_push() {
            let passed = mv.from().offset(us.pawn_direction(), 0);
            if let Some(ep) = passed {
                hash ^= keys.en_passant(ep);
            }
            passed
        } else {
            None
        };

        if mv.piece() == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = them;
        self.hash = hash;
        debug_assert_eq!(self.hash, self.compute_hash());
        Some(memento)
    }

    /// Revert `mv`, which must be the last move made on this board.
    pub fn unmake_move(&mut self, mv: Move, memento: Memento) {
        let us = self.side_to_move.opponent();
        self.revert_placement(mv, us, memento.captured_slot);
        if us == Color::Black {
            self.fullmove_number -= 1;
        }
        self.side_to_move = us;
        self.castling = memento.castling;
        self.en_passant = memento.en_passant;
        self.halfmove_clock = memento.halfmove_clock;
        self.hash = memento.hash;
    }
}
