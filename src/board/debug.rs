use std::fmt;

use super::{Board, Color, Square};

impl fmt::Display for Board {
    /// Board diagram with rank 8 at the top, followed by the FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8u8 {
                let c = match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")?;
        let to_move = match self.side_to_move {
            Color::White => "White",
            Color::Black => "Black",
        };
        writeln!(f, "{to_move} to move")?;
        write!(f, "{}", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shows_pieces_and_fen() {
        let text = Board::new().to_string();
        assert!(text.contains("8 | r n b q k b n r |"));
        assert!(text.contains("1 | R N B Q K B N R |"));
        assert!(text.ends_with("w KQkq - 0 1"));
    }
}
