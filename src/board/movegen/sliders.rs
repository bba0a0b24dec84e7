use super::super::attack_tables::slider_rays;
use super::{Board, GenContext, MoveList, Piece, Square};

impl Board {
    /// Walk each ray until the first occupied square; an enemy there is a
    /// capture, an own piece is not.
    pub(super) fn generate_slider_moves(
        &self,
        ctx: &GenContext<'_>,
        piece: Piece,
        from: Square,
        moves: &mut MoveList,
    ) {
        for ray in slider_rays(piece, from) {
            for &to in ray.squares() {
                if ctx.own.occupied().contains(to) {
                    break;
                }
                ctx.push_to(moves, piece, from, to);
                if ctx.occupied.contains(to) {
                    break;
                }
            }
        }
    }
}
