//! Board state: per-side piece sets plus the position's non-placement fields.

use super::attack_tables::{ray_attacks, slider_rays, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};
use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// Most pieces one side can have on a legal board.
pub(crate) const MAX_PIECES: usize = 16;

/// One entry of a side's piece list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceEntry {
    pub piece: Piece,
    pub square: Square,
}

/// Dense list of a side's pieces, for enumeration without bit-scanning.
///
/// Removal swaps the last entry into the vacated slot; [`PieceList::restore`]
/// undoes exactly that, so make/unmake leaves the order unchanged. Slots past
/// `len` are ignored by equality.
#[derive(Clone, Debug)]
pub(crate) struct PieceList {
    entries: [PieceEntry; MAX_PIECES],
    len: u8,
}

impl PieceList {
    const EMPTY_ENTRY: PieceEntry = PieceEntry {
        piece: Piece::Pawn,
        square: Square::A1,
    };

    fn new() -> Self {
        PieceList {
            entries: [Self::EMPTY_ENTRY; MAX_PIECES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[PieceEntry] {
        &self.entries[..self.len as usize]
    }

    #[inline]
    fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    fn push(&mut self, piece: Piece, square: Square) {
        debug_assert!(self.len() < MAX_PIECES);
        self.entries[self.len()] = PieceEntry { piece, square };
        self.len += 1;
    }

    #[inline]
    fn position(&self, piece: Piece, square: Square) -> Option<usize> {
        self.as_slice()
            .iter()
            .position(|e| e.square == square && e.piece == piece)
    }

    /// Swap-remove the entry, returning the slot it occupied.
    #[inline]
    fn remove(&mut self, piece: Piece, square: Square) -> u8 {
        match self.position(piece, square) {
            Some(idx) => {
                self.len -= 1;
                self.entries[idx] = self.entries[self.len()];
                self.entries[self.len()] = Self::EMPTY_ENTRY;
                idx as u8
            }
            None => self.len,
        }
    }

    /// Put an entry back into `slot`, moving that slot's occupant to the end.
    #[inline]
    fn restore(&mut self, piece: Piece, square: Square, slot: u8) {
        debug_assert!(slot <= self.len);
        let slot = slot as usize;
        let end = self.len();
        self.entries[end] = self.entries[slot];
        self.entries[slot] = PieceEntry { piece, square };
        self.len += 1;
    }

    #[inline]
    fn relocate(&mut self, piece: Piece, from: Square, to: Square) {
        if let Some(idx) = self.position(piece, from) {
            self.entries[idx].square = to;
        }
    }

    #[inline]
    fn replace(&mut self, old: PieceEntry, new: PieceEntry) {
        if let Some(idx) = self.position(old.piece, old.square) {
            self.entries[idx] = new;
        }
    }
}

impl PartialEq for PieceList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for PieceList {}

/// All pieces of one side.
///
/// A queen is stored as a bit in both `rooks` and `bishops`; pure rooks and
/// bishops are the sets minus that overlap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSet {
    occupied: Bitboard,
    pawns: Bitboard,
    knights: Bitboard,
    bishops: Bitboard,
    rooks: Bitboard,
    king: Bitboard,
    list: PieceList,
}

impl PieceSet {
    pub(crate) fn new() -> Self {
        PieceSet {
            occupied: Bitboard::EMPTY,
            pawns: Bitboard::EMPTY,
            knights: Bitboard::EMPTY,
            bishops: Bitboard::EMPTY,
            rooks: Bitboard::EMPTY,
            king: Bitboard::EMPTY,
            list: PieceList::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Squares holding pieces of kind `piece`.
    #[inline]
    #[must_use]
    pub fn bitboard(&self, piece: Piece) -> Bitboard {
        match piece {
            Piece::Pawn => self.pawns,
            Piece::Knight => self.knights,
            Piece::Bishop => self.bishops & !self.rooks,
            Piece::Rook => self.rooks & !self.bishops,
            Piece::Queen => self.rooks & self.bishops,
            Piece::King => self.king,
        }
    }

    /// Pieces moving diagonally (bishops and queens)
    #[inline]
    pub(crate) fn diagonal_sliders(&self) -> Bitboard {
        self.bishops
    }

    /// Pieces moving along ranks and files (rooks and queens)
    #[inline]
    pub(crate) fn orthogonal_sliders(&self) -> Bitboard {
        self.rooks
    }

    #[inline]
    #[must_use]
    pub fn king_square(&self) -> Option<Square> {
        self.king.lsb()
    }

    /// Piece list. The order depends only on how the position was built
    /// and is preserved across make/unmake.
    #[inline]
    #[must_use]
    pub fn pieces(&self) -> &[PieceEntry] {
        self.list.as_slice()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.occupied.contains(sq) {
            return None;
        }
        let piece = if self.pawns.contains(sq) {
            Piece::Pawn
        } else if self.knights.contains(sq) {
            Piece::Knight
        } else if self.king.contains(sq) {
            Piece::King
        } else {
            match (self.rooks.contains(sq), self.bishops.contains(sq)) {
                (true, true) => Piece::Queen,
                (true, false) => Piece::Rook,
                _ => Piece::Bishop,
            }
        };
        Some(piece)
    }

    #[inline]
    fn toggle_bits(&mut self, piece: Piece, sq: Square) {
        let bit = Bitboard::from_square(sq);
        self.occupied ^= bit;
        match piece {
            Piece::Pawn => self.pawns ^= bit,
            Piece::Knight => self.knights ^= bit,
            Piece::Bishop => self.bishops ^= bit,
            Piece::Rook => self.rooks ^= bit,
            Piece::Queen => {
                self.rooks ^= bit;
                self.bishops ^= bit;
            }
            Piece::King => self.king ^= bit,
        }
    }

    /// Put `piece` on the empty square `sq`.
    #[inline]
    pub(crate) fn place(&mut self, piece: Piece, sq: Square) {
        debug_assert!(!self.occupied.contains(sq));
        self.toggle_bits(piece, sq);
        self.list.push(piece, sq);
    }

    /// Take `piece` off `sq`, returning its piece-list slot for [`PieceSet::restore`].
    #[inline]
    pub(crate) fn remove(&mut self, piece: Piece, sq: Square) -> u8 {
        debug_assert_eq!(self.piece_at(sq), Some(piece));
        self.toggle_bits(piece, sq);
        self.list.remove(piece, sq)
    }

    /// Undo [`PieceSet::remove`], putting the entry back in its old slot.
    #[inline]
    pub(crate) fn restore(&mut self, piece: Piece, sq: Square, slot: u8) {
        debug_assert!(!self.occupied.contains(sq));
        self.toggle_bits(piece, sq);
        self.list.restore(piece, sq, slot);
    }

    /// Turn the pawn on `from` into `promotion` on `to`, keeping its slot.
    #[inline]
    pub(crate) fn promote(&mut self, from: Square, to: Square, promotion: Piece) {
        self.toggle_bits(Piece::Pawn, from);
        self.toggle_bits(promotion, to);
        self.list.replace(
            PieceEntry { piece: Piece::Pawn, square: from },
            PieceEntry { piece: promotion, square: to },
        );
    }

    /// Inverse of [`PieceSet::promote`].
    #[inline]
    pub(crate) fn demote(&mut self, from: Square, to: Square, promotion: Piece) {
        self.toggle_bits(promotion, to);
        self.toggle_bits(Piece::Pawn, from);
        self.list.replace(
            PieceEntry { piece: promotion, square: to },
            PieceEntry { piece: Piece::Pawn, square: from },
        );
    }

    #[inline]
    pub(crate) fn relocate(&mut self, piece: Piece, from: Square, to: Square) {
        self.toggle_bits(piece, from);
        self.toggle_bits(piece, to);
        self.list.relocate(piece, from, to);
    }

    #[inline]
    pub(crate) fn piece_count(&self) -> usize {
        self.list.len()
    }

    /// Every square attacked by this side, with sliders blocked by `blockers`.
    #[must_use]
    pub fn attacks(&self, color: Color, blockers: Bitboard) -> Bitboard {
        let mut attacks = Bitboard::EMPTY;
        for entry in self.pieces() {
            let sq = entry.square;
            attacks |= match entry.piece {
                Piece::Pawn => PAWN_ATTACKS[color.index()][sq.index()],
                Piece::Knight => KNIGHT_ATTACKS[sq.index()],
                Piece::King => KING_ATTACKS[sq.index()],
                slider => ray_attacks(slider_rays(slider, sq), blockers),
            };
        }
        attacks
    }

    /// Bitboard and piece-list consistency, described on failure.
    pub(crate) fn check_consistency(&self) -> Result<(), String> {
        let kinds = [self.pawns, self.knights, self.bishops | self.rooks, self.king];
        let mut seen = Bitboard::EMPTY;
        for bb in kinds {
            if !(seen & bb).is_empty() {
                return Err(format!("piece kinds overlap at {:#018x}", (seen & bb).0));
            }
            seen |= bb;
        }
        if seen != self.occupied {
            return Err("piece kinds do not cover occupancy".to_string());
        }
        if self.king.popcount() != 1 {
            return Err(format!("{} kings", self.king.popcount()));
        }
        if self.list.len() != self.occupied.popcount() as usize {
            return Err("piece list length differs from occupancy".to_string());
        }
        for entry in self.pieces() {
            if self.piece_at(entry.square) != Some(entry.piece) {
                return Err(format!("piece list has stale entry on {}", entry.square));
            }
        }
        Ok(())
    }
}

/// Snapshot of the fields a move cannot restore on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Memento {
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) hash: u64,
    pub(crate) captured_slot: u8,
}

/// A chess position.
///
/// Mutated in place through nested [`Board::make_move`] and
/// [`Board::unmake_move`] calls, which must nest like a stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) sides: [PieceSet; 2],
    pub(crate) side_to_move: Color,
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling: CastlingRights,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
}

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        // Same placement order as parsing the start FEN, rank 8 down to rank 1.
        for (file, piece) in (0u8..).zip(back_rank) {
            board.sides[1].place(piece, Square::new(7, file));
        }
        for file in 0..8u8 {
            board.sides[1].place(Piece::Pawn, Square::new(6, file));
        }
        for file in 0..8u8 {
            board.sides[0].place(Piece::Pawn, Square::new(1, file));
        }
        for (file, piece) in (0u8..).zip(back_rank) {
            board.sides[0].place(piece, Square::new(0, file));
        }
        board.castling = CastlingRights::all();
        board.hash = board.compute_hash();
        board
    }

    /// A board with no pieces, white to move.
    #[must_use]
    pub fn empty() -> Self {
        let mut board = Board {
            sides: [PieceSet::new(), PieceSet::new()],
            side_to_move: Color::White,
            en_passant: None,
            castling: CastlingRights::none(),
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
        };
        board.hash = board.compute_hash();
        board
    }

    #[inline]
    #[must_use]
    pub fn side(&self, color: Color) -> &PieceSet {
        &self.sides[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Incrementally maintained Zobrist fingerprint.
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0].occupied() | self.sides[1].occupied()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        Color::BOTH
            .into_iter()
            .find_map(|color| self.side(color).piece_at(sq).map(|p| (color, p)))
    }

    /// Squares attacked by `color` in the current position.
    #[must_use]
    pub fn attacks(&self, color: Color) -> Bitboard {
        self.side(color).attacks(color, self.occupied())
    }

    /// Whether any piece of `by` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let attackers = self.side(by);
        let idx = sq.index();
        if !(KNIGHT_ATTACKS[idx] & attackers.bitboard(Piece::Knight)).is_empty()
            || !(KING_ATTACKS[idx] & attackers.bitboard(Piece::King)).is_empty()
            || !(PAWN_ATTACKS[by.opponent().index()][idx] & attackers.bitboard(Piece::Pawn))
                .is_empty()
        {
            return true;
        }
        let occupied = self.occupied();
        let straight = attackers.orthogonal_sliders();
        let diagonal = attackers.diagonal_sliders();
        (!straight.is_empty()
            && !(ray_attacks(slider_rays(Piece::Rook, sq), occupied) & straight).is_empty())
            || (!diagonal.is_empty()
                && !(ray_attacks(slider_rays(Piece::Bishop, sq), occupied) & diagonal).is_empty())
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.side(color)
            .king_square()
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Check the structural invariants of the position.
    ///
    /// Per side the piece kinds partition occupancy and there is exactly
    /// one king; the sides do not overlap; piece lists agree with the
    /// bitboards; the stored fingerprint matches a fresh computation.
    pub fn validate(&self) -> Result<(), String> {
        for color in Color::BOTH {
            self.side(color)
                .check_consistency()
                .map_err(|e| format!("{color}: {e}"))?;
        }
        if !(self.sides[0].occupied() & self.sides[1].occupied()).is_empty() {
            return Err("sides overlap".to_string());
        }
        if self.hash != self.compute_hash() {
            return Err("incremental hash differs from recomputation".to_string());
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
