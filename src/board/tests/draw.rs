//! Halfmove clock and draw scoring tests.

use std::sync::Arc;

use super::{board, find_move};
use crate::board::search::{
    minimax_root, search_root, IdentityOrdering, MaterialScorer, NullLogger, SearchContext, DRAW_SCORE,
    INFINITY,
};
use crate::tt::TranspositionTable;

fn context() -> SearchContext {
    SearchContext::new(
        Arc::new(TranspositionTable::new(2, 4096)),
        Arc::new(MaterialScorer),
        Arc::new(IdentityOrdering),
    )
}

#[test]
fn test_fifty_move_draw_ignores_material() {
    let mut board = board("4k3/8/8/8/8/8/8/QQ2K3 w - - 100 80");
    let mut searcher = context().searcher();
    for depth in 1..=3 {
        assert_eq!(searcher.search(&mut board, depth, -INFINITY, INFINITY), DRAW_SCORE);
    }
}

#[test]
fn test_root_at_limit_is_drawn_even_with_captures() {
    // Qxa2 would reset the clock in the child, but the root is already drawn.
    let mut board = board("4k3/8/8/8/8/8/q7/QQ2K3 w - - 100 80");
    for depth in 1..=2 {
        let result = search_root(&context(), &NullLogger, &board, depth).expect("legal moves");
        assert_eq!(result.score, DRAW_SCORE, "depth {depth}");
        assert_eq!(result.best_move, board.legal_moves()[0]);
        let (_, reference) = minimax_root(&mut board, depth, &MaterialScorer).expect("legal moves");
        assert_eq!(reference, DRAW_SCORE);
    }
}

#[test]
fn test_clock_reaching_limit_during_search() {
    // Every quiet reply pushes the clock to 100, so a capture-free line is a
    // draw even with a queen up.
    let board = board("4k3/8/8/8/8/8/8/Q3K3 w - - 99 80");
    let result = search_root(&context(), &NullLogger, &board, 2).expect("legal moves");
    assert_eq!(result.score, DRAW_SCORE);
}

#[test]
fn test_clock_resets_on_pawn_move() {
    let mut board = board("4k3/4p3/8/8/8/8/4P3/4K3 w - - 37 40");
    let mv = find_move(&board, "e2", "e3", None);
    board.make_move(mv).expect("legal");
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_clock_resets_on_capture() {
    let mut board = board("4k3/8/8/3n4/8/2N5/8/4K3 w - - 37 40");
    let mv = find_move(&board, "c3", "d5", None);
    assert!(mv.is_capture());
    let memento = board.make_move(mv).expect("legal");
    assert_eq!(board.halfmove_clock(), 0);
    board.unmake_move(mv, memento);
    assert_eq!(board.halfmove_clock(), 37);
}

#[test]
fn test_clock_counts_quiet_moves() {
    let mut board = board("4k3/8/8/8/8/2N5/8/4K3 w - - 37 40");
    let mv = find_move(&board, "c3", "d5", None);
    board.make_move(mv).expect("legal");
    assert_eq!(board.halfmove_clock(), 38);
    assert_eq!(board.fullmove_number(), 40);
}

#[test]
fn test_repetition_against_history_is_draw() {
    // Knight shuffle back to the position recorded in the history.
    let mut board = board("4k3/8/8/8/8/8/8/1N2K3 w - - 10 40");
    let start_hash = board.hash();
    let out = find_move(&board, "b1", "c3", None);
    board.make_move(out).expect("legal");
    let hash_after_out = board.hash();
    let reply = find_move(&board, "e8", "d8", None);
    board.make_move(reply).expect("legal");
    let hash_after_reply = board.hash();
    let back = find_move(&board, "c3", "b1", None);
    board.make_move(back).expect("legal");
    let hash_after_back = board.hash();
    let reply = find_move(&board, "d8", "e8", None);
    board.make_move(reply).expect("legal");
    assert_eq!(board.hash(), start_hash);

    let ctx = context();
    let history = [start_hash, hash_after_out, hash_after_reply, hash_after_back];
    let mut searcher = ctx.searcher().with_history(&history);
    assert_eq!(searcher.search(&mut board, 3, -INFINITY, INFINITY), DRAW_SCORE);
}
