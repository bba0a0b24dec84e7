//! Error types for board and search operations.

use thiserror::Error;

use crate::pool::TaskError;

/// Error type for square notation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("Invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
}

/// A position string that cannot describe a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four mandatory fields
    #[error("FEN must have at least 4 fields, found {found}")]
    TooFewParts { found: usize },
    #[error("FEN has more than 6 fields, found {found}")]
    TooManyParts { found: usize },
    #[error("Invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    #[error("Expected 8 ranks in FEN placement, found {found}")]
    WrongRankCount { found: usize },
    /// A rank that does not describe exactly 8 files
    #[error("Rank {rank} describes {files} files instead of 8")]
    BadRankWidth { rank: usize, files: usize },
    #[error("Invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    #[error("Invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },
    #[error("Invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    #[error("Invalid {field} clock '{found}'")]
    InvalidClock { field: &'static str, found: String },
    #[error("{color} must have exactly one king, found {found}")]
    KingCount { color: crate::board::Color, found: u32 },
    #[error("{color} has more than 16 pieces")]
    TooManyPieces { color: crate::board::Color },
}

/// Move text that does not resolve to exactly one legal move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Empty move text")]
    Empty,
    #[error("Malformed move text '{notation}'")]
    Malformed { notation: String },
    #[error("No legal move matches '{notation}'")]
    NoMatch { notation: String },
    #[error("Move text '{notation}' is ambiguous ({candidates} candidates)")]
    Ambiguous { notation: String, candidates: usize },
    #[error("Move '{notation}' leaves the king in check")]
    IllegalMove { notation: String },
}

/// Failures surfaced by a root search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search depth must be at least 1")]
    ZeroDepth,
    #[error("No legal moves in the root position")]
    NoLegalMoves,
    #[error("Root move {mv} failed: {source}")]
    TaskFailed {
        mv: String,
        #[source]
        source: TaskError,
    },
}
