//! Core board types.
//!
//! - `Piece` and `Color` - piece kinds and sides
//! - `Square` - board square (index 0-63)
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use castling::castle_path;
pub(crate) use piece::PROMOTION_PIECES;
