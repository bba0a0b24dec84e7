//! Static evaluation.

use super::super::{Board, Color, Piece};

/// Static evaluator used at the leaves of the search.
///
/// Scores are in centipawns from White's point of view: positive favors
/// White regardless of the side to move.
pub trait Scorer: Send + Sync {
    fn score(&self, board: &Board) -> i32;
}

/// Material count with the piece values from Berliner (1999).
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    pub const PAWN: i32 = 100;
    pub const KNIGHT: i32 = 320;
    pub const BISHOP: i32 = 333;
    pub const ROOK: i32 = 510;
    pub const QUEEN: i32 = 880;

    /// Value of one piece of kind `piece`; the king counts as zero.
    #[must_use]
    pub const fn value(piece: Piece) -> i32 {
        match piece {
            Piece::Pawn => Self::PAWN,
            Piece::Knight => Self::KNIGHT,
            Piece::Bishop => Self::BISHOP,
            Piece::Rook => Self::ROOK,
            Piece::Queen => Self::QUEEN,
            Piece::King => 0,
        }
    }

    fn material(board: &Board, color: Color) -> i32 {
        let side = board.side(color);
        [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
            .into_iter()
            .map(|piece| side.bitboard(piece).popcount() as i32 * Self::value(piece))
            .sum()
    }
}

impl Scorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        Self::material(board, Color::White) - Self::material(board, Color::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_is_balanced() {
        assert_eq!(MaterialScorer.score(&Board::new()), 0);
    }

    #[test]
    fn test_queen_counted_once() {
        let board = Board::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("valid FEN");
        assert_eq!(MaterialScorer.score(&board), MaterialScorer::QUEEN);
    }

    #[test]
    fn test_score_is_from_white_view() {
        let board = Board::from_fen("3rk3/8/8/8/8/8/8/4KB2 b - - 0 1").expect("valid FEN");
        assert_eq!(
            MaterialScorer.score(&board),
            MaterialScorer::BISHOP - MaterialScorer::ROOK
        );
    }
}
