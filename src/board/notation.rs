//! Resolving move text against the current position.
//!
//! Accepts coordinate notation (`e2e4`, `e7e8q`) and standard algebraic
//! notation (`e4`, `Nf3`, `exd5`, `Nbd2`, `R1e2`, `e8=Q`, `O-O`, `O-O-O`).
//! Check and annotation suffixes are ignored.

use super::error::NotationError;
use super::state::Memento;
use super::{Board, CastleSide, Move, MoveList, Piece, Square};

/// What the text says about the move, before matching it against the board.
#[derive(Debug, Default, PartialEq, Eq)]
struct MovePattern {
    piece: Option<Piece>,
    from_file: Option<u8>,
    from_rank: Option<u8>,
    from: Option<Square>,
    to: Option<Square>,
    promotion: Option<Piece>,
    castle: Option<CastleSide>,
}

impl MovePattern {
    fn matches(&self, mv: &Move) -> bool {
        if let Some(side) = self.castle {
            return mv.castle_side() == Some(side);
        }
        self.piece.map_or(true, |p| p == mv.piece())
            && self.from.map_or(true, |sq| sq == mv.from())
            && self.to == Some(mv.to())
            && self.from_file.map_or(true, |f| f == mv.from().file())
            && self.from_rank.map_or(true, |r| r == mv.from().rank())
            && self.promotion == mv.promotion()
    }
}

fn parse_file(c: u8) -> Option<u8> {
    (b'a'..=b'h').contains(&c).then(|| c - b'a')
}

fn parse_rank(c: u8) -> Option<u8> {
    (b'1'..=b'8').contains(&c).then(|| c - b'1')
}

fn parse_square(file: u8, rank: u8) -> Option<Square> {
    Some(Square::new(parse_rank(rank)?, parse_file(file)?))
}

fn parse_coordinate(text: &[u8]) -> Option<MovePattern> {
    if !(4..=5).contains(&text.len()) {
        return None;
    }
    let from = parse_square(text[0], text[1])?;
    let to = parse_square(text[2], text[3])?;
    let promotion = match text.get(4) {
        None => None,
        Some(&c) => match Piece::from_char(c as char)? {
            Piece::Pawn | Piece::King => return None,
            p => Some(p),
        },
    };
    Some(MovePattern {
        from: Some(from),
        to: Some(to),
        promotion,
        ..MovePattern::default()
    })
}

fn parse_algebraic(text: &[u8]) -> Option<MovePattern> {
    let mut pattern = MovePattern::default();
    let mut rest = text;

    if let Some((&first, tail)) = rest.split_first() {
        if first.is_ascii_uppercase() {
            pattern.piece = Some(match first {
                b'N' => Piece::Knight,
                b'B' => Piece::Bishop,
                b'R' => Piece::Rook,
                b'Q' => Piece::Queen,
                b'K' => Piece::King,
                _ => return None,
            });
            rest = tail;
        } else {
            pattern.piece = Some(Piece::Pawn);
        }
    }

    // Promotion suffix: `=Q` or a bare trailing piece letter.
    if let Some((&last, head)) = rest.split_last() {
        if last.is_ascii_alphabetic() && !(b'a'..=b'h').contains(&last) {
            let promotion = Piece::from_char(last as char)?;
            if matches!(promotion, Piece::Pawn | Piece::King) || pattern.piece != Some(Piece::Pawn) {
                return None;
            }
            pattern.promotion = Some(promotion);
            rest = head.strip_suffix(b"=").unwrap_or(head);
        }
    }

    if rest.len() < 2 {
        return None;
    }
    let (hints, dest) = rest.split_at(rest.len() - 2);
    pattern.to = Some(parse_square(dest[0], dest[1])?);

    for &c in hints.iter().filter(|&&c| c != b'x') {
        if let Some(file) = parse_file(c) {
            pattern.from_file = Some(file);
        } else if let Some(rank) = parse_rank(c) {
            pattern.from_rank = Some(rank);
        } else {
            return None;
        }
    }
    Some(pattern)
}

fn parse_pattern(text: &str) -> Option<MovePattern> {
    match text {
        "O-O" | "0-0" => {
            return Some(MovePattern {
                castle: Some(CastleSide::Kingside),
                ..MovePattern::default()
            })
        }
        "O-O-O" | "0-0-0" => {
            return Some(MovePattern {
                castle: Some(CastleSide::Queenside),
                ..MovePattern::default()
            })
        }
        _ => {}
    }
    let bytes = text.as_bytes();
    parse_coordinate(bytes).or_else(|| parse_algebraic(bytes))
}

impl Board {
    /// Resolve move text to exactly one legal move.
    pub fn resolve(&mut self, text: &str) -> Result<Move, NotationError> {
        let cleaned = text.trim().trim_end_matches(['+', '#', '!', '?']);
        if cleaned.is_empty() {
            return Err(NotationError::Empty);
        }
        let pattern = parse_pattern(cleaned).ok_or_else(|| NotationError::Malformed {
            notation: text.to_string(),
        })?;

        let candidates: MoveList = self
            .generate_moves()
            .into_iter()
            .filter(|mv| pattern.matches(mv))
            .collect();
        if candidates.is_empty() {
            return Err(NotationError::NoMatch {
                notation: text.to_string(),
            });
        }

        let mut legal = candidates.iter().copied().filter(|&mv| match self.make_move(mv) {
            Some(memento) => {
                self.unmake_move(mv, memento);
                true
            }
            None => false,
        });
        let Some(first) = legal.next() else {
            return Err(NotationError::IllegalMove {
                notation: text.to_string(),
            });
        };
        let extra = legal.count();
        if extra > 0 {
            return Err(NotationError::Ambiguous {
                notation: text.to_string(),
                candidates: extra + 1,
            });
        }
        Ok(first)
    }

    /// Resolve `text` and play it, returning the memento to undo it.
    pub fn play(&mut self, text: &str) -> Result<(Move, Memento), NotationError> {
        let mv = self.resolve(text)?;
        let memento = self.make_move(mv).ok_or_else(|| NotationError::IllegalMove {
            notation: text.to_string(),
        })?;
        Ok((mv, memento))
    }
}
