//! Unpruned minimax without a transposition table.
//!
//! Applies the same leaf, draw and terminal rules as the real search and
//! exists to check it: at equal depth both must produce the same root
//! score.

use super::super::{Board, Color, Move};
use super::constants::{DRAW_SCORE, FIFTY_MOVE_LIMIT};
use super::negamax::terminal_score;
use super::scorer::Scorer;

fn is_repetition(path: &[u64], board: &Board) -> bool {
    let window = board.halfmove_clock() as usize / 2;
    path.iter()
        .rev()
        .skip(1)
        .step_by(2)
        .take(window)
        .any(|&seen| seen == board.hash())
}

fn minimax_inner(board: &mut Board, depth: u32, scorer: &dyn Scorer, path: &mut Vec<u64>) -> i32 {
    if depth == 0 {
        return scorer.score(board);
    }
    if board.halfmove_clock() >= FIFTY_MOVE_LIMIT || is_repetition(path, board) {
        return DRAW_SCORE;
    }

    let to_move = board.side_to_move();
    let maximizing = to_move == Color::White;
    let mut best: Option<i32> = None;
    path.push(board.hash());
    for mv in board.generate_moves() {
        let Some(memento) = board.make_move(mv) else {
            continue;
        };
        let score = minimax_inner(board, depth - 1, scorer, path);
        board.unmake_move(mv, memento);
        best = Some(match best {
            None => score,
            Some(b) if maximizing => b.max(score),
            Some(b) => b.min(score),
        });
    }
    path.pop();

    best.unwrap_or_else(|| terminal_score(board, to_move) * to_move.sign())
}

/// Minimax value of `board` at `depth`, from White's point of view.
pub fn minimax(board: &mut Board, depth: u32, scorer: &dyn Scorer) -> i32 {
    minimax_inner(board, depth, scorer, &mut Vec::new())
}

/// Best root move by full minimax, with the same tie rule as the engine.
pub fn minimax_root(board: &mut Board, depth: u32, scorer: &dyn Scorer) -> Option<(Move, i32)> {
    let sign = board.side_to_move().sign();
    let root_hash = board.hash();
    let mut best: Option<(Move, i32)> = None;
    for mv in board.generate_moves() {
        let Some(memento) = board.make_move(mv) else {
            continue;
        };
        if memento.halfmove_clock >= FIFTY_MOVE_LIMIT {
            board.unmake_move(mv, memento);
            return Some((mv, DRAW_SCORE));
        }
        let score = minimax_inner(board, depth.saturating_sub(1), scorer, &mut vec![root_hash]);
        board.unmake_move(mv, memento);
        if best.map_or(true, |(_, b)| score * sign > b * sign) {
            best = Some((mv, score));
        }
    }
    best
}
