use super::super::attack_tables::KNIGHT_ATTACKS;
use super::{Board, GenContext, MoveList, Piece, Square};

impl Board {
    pub(super) fn generate_knight_moves(
        &self,
        ctx: &GenContext<'_>,
        from: Square,
        moves: &mut MoveList,
    ) {
        let targets = KNIGHT_ATTACKS[from.index()] & !ctx.own.occupied();
        for to in targets.iter() {
            ctx.push_to(moves, Piece::Knight, from, to);
        }
    }
}
