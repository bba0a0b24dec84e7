//! Board module tests.
//!
//! - `perft.rs` - move generation node counts
//! - `make_unmake.rs` - make/unmake restoration and hash consistency
//! - `edge_cases.rs` - special positions and moves
//! - `draw.rs` - halfmove clock and repetition handling
//! - `search.rs` - alpha-beta against unpruned minimax
//! - `proptest.rs` - property-based tests

mod draw;
mod perft;
mod proptest;

use crate::board::{Board, Move, Piece, Square};

/// The generated move from `from` to `to` with the given promotion.
pub(super) fn find_move(board: &Board, from: &str, to: &str, promotion: Option<Piece>) -> Move {
    let from: Square = from.parse().expect("valid square");
    let to: Square = to.parse().expect("valid square");
    board
        .generate_moves()
        .into_iter()
        .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
        .unwrap_or_else(|| panic!("expected move {from}{to} not generated"))
}

pub(super) fn board(fen: &str) -> Board {
    Board::from_fen(fen).expect("valid FEN")
}
