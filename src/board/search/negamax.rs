//! Depth-limited negamax with alpha-beta pruning and a shared
//! transposition table.

use std::sync::Arc;

use super::super::{Board, Color};
use super::constants::{DRAW_SCORE, FIFTY_MOVE_LIMIT, INFINITY, MATE_SCORE};
use super::move_order::MoveOrdering;
use super::scorer::Scorer;
use crate::tt::{BoundType, TranspositionTable};

/// Single-threaded recursive search over one board.
///
/// Scores returned by [`Searcher::search`] are relative to the side to move
/// (fail-soft negamax). The searcher keeps the fingerprints of the positions
/// on its current path for repetition detection.
pub struct Searcher {
    tt: Arc<TranspositionTable>,
    scorer: Arc<dyn Scorer>,
    ordering: Arc<dyn MoveOrdering>,
    path: Vec<u64>,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(
        tt: Arc<TranspositionTable>,
        scorer: Arc<dyn Scorer>,
        ordering: Arc<dyn MoveOrdering>,
    ) -> Self {
        Searcher {
            tt,
            scorer,
            ordering,
            path: Vec::with_capacity(64),
            nodes: 0,
        }
    }

    /// Seed the path with fingerprints of positions preceding the one to be
    /// searched, oldest first.
    #[must_use]
    pub fn with_history(mut self, history: &[u64]) -> Self {
        self.path.extend_from_slice(history);
        self
    }

    /// Nodes visited since construction.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `board` to `depth` plies inside the window `(alpha, beta)`.
    ///
    /// The board is returned to its original state.
    pub fn search(&mut self, board: &mut Board, depth: u32, alpha: i32, beta: i32) -> i32 {
        self.negamax(board, depth, alpha, beta)
    }

    /// Static evaluation relative to the side to move.
    fn evaluate(&self, board: &Board) -> i32 {
        self.scorer.score(board) * board.side_to_move().sign()
    }

    /// Whether the position already occurred on the current path with the
    /// same side to move since the last irreversible move.
    fn is_repetition(&self, board: &Board) -> bool {
        let window = board.halfmove_clock() as usize / 2;
        let hash = board.hash();
        self.path
            .iter()
            .rev()
            .skip(1)
            .step_by(2)
            .take(window)
            .any(|&seen| seen == hash)
    }

    fn negamax(&mut self, board: &mut Board, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return self.evaluate(board);
        }
        if board.halfmove_clock() >= FIFTY_MOVE_LIMIT || self.is_repetition(board) {
            return DRAW_SCORE;
        }

        let hash = board.hash();
        if let Some(entry) = self.tt.get(hash) {
            if entry.depth() >= depth {
                match entry.bound_type() {
                    BoundType::Exact => return entry.score(),
                    BoundType::LowerBound => alpha = alpha.max(entry.score()),
                    BoundType::UpperBound => beta = beta.min(entry.score()),
                }
                if alpha >= beta {
                    return entry.score();
                }
            }
        }

        // Window actually searched, after any tightening from the table
        let alpha_orig = alpha;
        let mut moves = board.generate_moves();
        self.ordering.reorder(moves.as_mut_slice());

        let mut best = -INFINITY;
        let mut any_legal = false;
        self.path.push(hash);
        for &mv in moves.iter() {
            let Some(memento) = board.make_move(mv) else {
                continue;
            };
            any_legal = true;
            let score = -self.negamax(board, depth - 1, -beta, -alpha);
            board.unmake_move(mv, memento);

            best = best.max(score);
            alpha = alpha.max(best);
            if alpha >= beta {
                break;
            }
        }
        self.path.pop();

        if !any_legal {
            let score = terminal_score(board, board.side_to_move());
            self.tt.put(hash, depth, score, BoundType::Exact);
            return score;
        }

        let bound = if best <= alpha_orig {
            BoundType::UpperBound
        } else if best >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.tt.put(hash, depth, best, bound);
        best
    }
}

/// Score of a position without legal moves, for the side to move.
pub(crate) fn terminal_score(board: &Board, to_move: Color) -> i32 {
    if board.is_in_check(to_move) {
        -MATE_SCORE
    } else {
        DRAW_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::super::move_order::IdentityOrdering;
    use super::super::scorer::MaterialScorer;
    use super::*;

    fn searcher() -> Searcher {
        Searcher::new(
            Arc::new(TranspositionTable::new(3, 4096)),
            Arc::new(MaterialScorer),
            Arc::new(IdentityOrdering),
        )
    }

    #[test]
    fn test_checkmated_side_gets_mate_score() {
        let mut board =
            Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("valid FEN");
        assert_eq!(searcher().search(&mut board, 2, -INFINITY, INFINITY), -MATE_SCORE);
    }

    #[test]
    fn test_stalemate_scores_zero() {
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("valid FEN");
        assert_eq!(searcher().search(&mut board, 3, -INFINITY, INFINITY), 0);
    }

    #[test]
    fn test_fifty_move_rule_overrides_material() {
        let mut board =
            Board::from_fen("4k3/8/8/8/8/8/8/QQQ1K3 w - - 100 80").expect("valid FEN");
        assert_eq!(searcher().search(&mut board, 2, -INFINITY, INFINITY), 0);
    }

    #[test]
    fn test_repetition_on_path_scores_zero() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 8 40").expect("valid FEN");
        let hash = board.hash();
        // The same position two plies earlier, with a reversible move between.
        let mut s = searcher().with_history(&[hash, 0xDEAD_BEEF]);
        assert_eq!(s.search(&mut board, 3, -INFINITY, INFINITY), 0);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new();
        let before = board.clone();
        let _ = searcher().search(&mut board, 3, -INFINITY, INFINITY);
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_fills_table() {
        let tt = Arc::new(TranspositionTable::new(2, 1024));
        let mut s = Searcher::new(
            Arc::clone(&tt),
            Arc::new(MaterialScorer),
            Arc::new(IdentityOrdering),
        );
        let mut board = Board::new();
        let _ = s.search(&mut board, 2, -INFINITY, INFINITY);
        assert!(!tt.is_empty());
        assert!(s.nodes() > 20);
    }
}
