use super::super::attack_tables::PAWN_ATTACKS;
use super::super::PROMOTION_PIECES;
use super::{Board, GenContext, Move, MoveList, Piece, Square};

impl Board {
    pub(super) fn generate_pawn_moves(
        &self,
        ctx: &GenContext<'_>,
        from: Square,
        moves: &mut MoveList,
    ) {
        let us = ctx.us;
        let promotion_rank = us.pawn_promotion_rank();

        if let Some(one) = from.offset(us.pawn_direction(), 0) {
            if !ctx.occupied.contains(one) {
                if one.rank() == promotion_rank {
                    push_promotions(moves, Move::new(from, one, Piece::Pawn));
                } else {
                    moves.push(Move::new(from, one, Piece::Pawn));
                    if from.rank() == us.pawn_start_rank() {
                        if let Some(two) = one.offset(us.pawn_direction(), 0) {
                            if !ctx.occupied.contains(two) {
                                moves.push(Move::double_pawn_push(from, two));
                            }
                        }
                    }
                }
            }
        }

        for to in PAWN_ATTACKS[us.index()][from.index()].iter() {
            if Some(to) == self.en_passant {
                moves.push(Move::en_passant(from, to));
            } else if ctx.capturable.contains(to) {
                let Some(captured) = ctx.enemy.piece_at(to) else {
                    continue;
                };
                let capture = Move::new(from, to, Piece::Pawn).with_capture(captured);
                if to.rank() == promotion_rank {
                    push_promotions(moves, capture);
                } else {
                    moves.push(capture);
                }
            }
        }
    }
}

fn push_promotions(moves: &mut MoveList, base: Move) {
    for piece in PROMOTION_PIECES {
        moves.push(base.with_promotion(piece));
    }
}
