use super::super::attack_tables::KING_ATTACKS;
use super::super::types::castle_path;
use super::super::CastleSide;
use super::{Board, GenContext, Move, MoveList, Piece, Square};

impl Board {
    /// King steps to squares the enemy does not attack, plus castling.
    ///
    /// The enemy attack set is computed with the king lifted off the board,
    /// so a slider checking along a line also covers the square behind
    /// the king.
    pub(super) fn generate_king_moves(
        &self,
        ctx: &GenContext<'_>,
        from: Square,
        moves: &mut MoveList,
    ) {
        let them = ctx.us.opponent();
        let danger = ctx.enemy.attacks(them, ctx.occupied.without(from));
        let targets = KING_ATTACKS[from.index()] & !ctx.own.occupied() & !danger;
        for to in targets.iter() {
            ctx.push_to(moves, Piece::King, from, to);
        }

        for side in CastleSide::BOTH {
            if !self.castling.has(ctx.us, side) {
                continue;
            }
            let path = castle_path(ctx.us, side);
            if path.king_from != from || ctx.own.piece_at(path.rook_from) != Some(Piece::Rook) {
                continue;
            }
            let blocked = path.between.iter().any(|&sq| ctx.occupied.contains(sq));
            let attacked = [path.king_from, path.transit, path.king_to]
                .iter()
                .any(|&sq| danger.contains(sq));
            if !blocked && !attacked {
                moves.push(Move::castle(path.king_from, path.king_to, side));
            }
        }
    }
}
