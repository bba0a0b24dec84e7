//! Board representation and game rules.
//!
//! Each side keeps bitboards per piece kind plus a dense piece list. Moves
//! are generated pseudo-legally and checked for king safety when made.
//!
//! # Example
//! ```
//! use rookery::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let (mv, memento) = board.play("e4").expect("legal move");
//! board.unmake_move(mv, memento);
//! assert_eq!(board, Board::new());
//! ```

mod attack_tables;
mod debug;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, NotationError, SearchError, SquareError};
pub use state::{Board, Memento, PieceEntry, PieceSet};
pub use types::{
    Bitboard, BitboardIter, CastleSide, CastlingRights, Color, Move, MoveKind, MoveList,
    MoveListIntoIter, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
