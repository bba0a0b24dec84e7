use std::fmt::Write as _;
use std::str::FromStr;

use super::error::FenError;
use super::search::FIFTY_MOVE_LIMIT;
use super::state::MAX_PIECES;
use super::{Board, CastleSide, Color, Piece, Square};

/// Largest fullmove number accepted from FEN.
const MAX_FULLMOVE_NUMBER: u32 = 10_000;

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// The halfmove clock and fullmove number may be omitted. An en passant
    /// square is kept only when an enemy pawn stands just past it, as after
    /// a real double push.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }
        if parts.len() > 6 {
            return Err(FenError::TooManyParts { found: parts.len() });
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::BadRankWidth {
                        rank: rank as usize + 1,
                        files: file + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let side = &mut board.sides[color.index()];
                if side.piece_count() == MAX_PIECES {
                    return Err(FenError::TooManyPieces { color });
                }
                side.place(piece, Square::new(rank, file as u8));
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankWidth {
                    rank: rank as usize + 1,
                    files: file,
                });
            }
        }
        for color in Color::BOTH {
            let kings = board.side(color).bitboard(Piece::King).popcount();
            if kings != 1 {
                return Err(FenError::KingCount {
                    color,
                    found: kings,
                });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        if parts[2] != "-" {
            for c in parts[2].chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::Kingside),
                    'Q' => (Color::White, CastleSide::Queenside),
                    'k' => (Color::Black, CastleSide::Kingside),
                    'q' => (Color::Black, CastleSide::Queenside),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                board.castling.set(color, side);
            }
        }

        if parts[3] != "-" {
            let ep: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            let expected_rank = match board.side_to_move {
                Color::White => 5,
                Color::Black => 2,
            };
            if ep.rank() != expected_rank {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
            let mover = board.side_to_move;
            let pawn_square = ep.offset(-mover.pawn_direction(), 0);
            let pawn_present = pawn_square.is_some_and(|sq| {
                board.side(mover.opponent()).piece_at(sq) == Some(Piece::Pawn)
            });
            if pawn_present && !board.occupied().contains(ep) {
                board.en_passant = Some(ep);
            }
        }

        board.halfmove_clock = parse_clock(parts.get(4), "halfmove", 0, FIFTY_MOVE_LIMIT)?;
        board.fullmove_number =
            parse_clock(parts.get(5), "fullmove", 1, MAX_FULLMOVE_NUMBER)?.max(1);
        board.hash = board.compute_hash();
        Ok(board)
    }

    /// Export the position as FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            let _ = write!(fen, "{empty}");
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                let _ = write!(fen, "{empty}");
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        if self.castling.is_empty() {
            fen.push('-');
        } else {
            for (color, side, c) in [
                (Color::White, CastleSide::Kingside, 'K'),
                (Color::White, CastleSide::Queenside, 'Q'),
                (Color::Black, CastleSide::Kingside, 'k'),
                (Color::Black, CastleSide::Queenside, 'q'),
            ] {
                if self.castling.has(color, side) {
                    fen.push(c);
                }
            }
        }

        match self.en_passant {
            Some(ep) => {
                let _ = write!(fen, " {ep}");
            }
            None => fen.push_str(" -"),
        }
        let _ = write!(fen, " {} {}", self.halfmove_clock, self.fullmove_number);
        fen
    }
}

fn parse_clock(
    field: Option<&&str>,
    name: &'static str,
    default: u32,
    max: u32,
) -> Result<u32, FenError> {
    let Some(text) = field else {
        return Ok(default);
    };
    match text.parse::<u32>() {
        Ok(value) if value <= max => Ok(value),
        _ => Err(FenError::InvalidClock {
            field: name,
            found: text.to_string(),
        }),
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
