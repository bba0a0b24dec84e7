//! Engine-level search tests: mates, parallel/serial agreement and failure
//! handling of root tasks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rookery::board::search::{IdentityOrdering, NullLogger, DRAW_SCORE, MATE_SCORE};
use rookery::board::SearchError;
use rookery::{Board, Engine, EngineConfig, Scorer};

fn engine(threads: usize) -> Engine {
    let config = EngineConfig::default()
        .with_threads(threads)
        .with_tt_segments(3)
        .with_tt_entries_per_segment(1 << 14);
    Engine::new(config).expect("worker threads spawn")
}

fn board(fen: &str) -> Board {
    Board::from_fen(fen).expect("valid FEN")
}

/// Back rank mate with a rook
#[test]
fn finds_mate_in_one_back_rank() {
    let result = engine(2)
        .best_move(&board("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1"), 2)
        .expect("search succeeds");
    assert_eq!(result.best_move.to_string(), "a1a8");
    assert_eq!(result.score, MATE_SCORE);
}

/// Scholar's mate, Qxf7#
#[test]
fn finds_mate_in_one_queen() {
    let board = board("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4");
    let result = engine(4).best_move(&board, 2).expect("search succeeds");
    assert_eq!(result.best_move.to_string(), "h5f7");
    assert_eq!(result.score, MATE_SCORE);
}

/// Free bishop on c6 is taken
#[test]
fn captures_free_piece() {
    let board = board("r1bqkbnr/pppp1ppp/2B5/4p3/4P3/8/PPPP1PPP/RNBQK1NR b KQkq - 0 3");
    let result = engine(2).best_move(&board, 2).expect("search succeeds");
    assert!(
        ["b7c6", "d7c6"].contains(&result.best_move.to_string().as_str()),
        "expected a recapture on c6, got {}",
        result.best_move
    );
}

#[test]
fn parallel_and_serial_agree() {
    let fens = [
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 4),
        ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 3),
        ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 4),
        ("4k3/8/8/3q4/8/2N5/8/4K3 w - - 0 1", 4),
    ];
    for (fen, max_depth) in fens {
        let board = board(fen);
        for depth in 1..=max_depth {
            let parallel = engine(4).best_move(&board, depth).expect("parallel search");
            let serial = engine(1).best_move_serial(&board, depth).expect("serial search");
            assert_eq!(parallel.best_move, serial.best_move, "{fen} depth {depth}");
            assert_eq!(parallel.score, serial.score, "{fen} depth {depth}");
        }
    }
}

/// A board that has been walked by perft and searched before gives the
/// same answer as a freshly parsed one.
#[test]
fn used_board_searches_like_fresh_board() {
    let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    let fresh = board(fen);
    let mut used = board(fen);
    let _ = used.perft(3);
    let _ = used.legal_moves();
    engine(2).best_move(&used, 2).expect("search succeeds");

    let expected = engine(1).best_move_serial(&fresh, 4).expect("serial search");
    let serial = engine(1).best_move_serial(&used, 4).expect("serial search");
    let parallel = engine(4).best_move(&used, 4).expect("parallel search");
    assert_eq!(serial.best_move, expected.best_move);
    assert_eq!(serial.score, expected.score);
    assert_eq!(parallel.best_move, expected.best_move);
    assert_eq!(parallel.score, expected.score);
}

/// Two queens up, but the halfmove clock already stands at 100.
#[test]
fn root_at_fifty_move_limit_scores_draw() {
    let fen = "4k3/8/8/8/8/8/8/QQ2K3 w - - 100 80";
    let mut position = board(fen);
    let first_legal = position.legal_moves()[0];
    for depth in 1..=2 {
        let parallel = engine(2).best_move(&position, depth).expect("parallel search");
        let serial = engine(1).best_move_serial(&position, depth).expect("serial search");
        assert_eq!(parallel.score, DRAW_SCORE, "depth {depth}");
        assert_eq!(serial.score, DRAW_SCORE, "depth {depth}");
        assert_eq!(parallel.best_move, first_legal);
        assert_eq!(serial.best_move, first_legal);
    }
}

#[test]
fn repeated_searches_are_stable_after_reset() {
    let engine = engine(3);
    let board = board("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let first = engine.best_move_serial(&board, 3).expect("search succeeds");
    assert!(!engine.transposition_table().is_empty());

    engine.reset();
    assert!(engine.transposition_table().is_empty());
    let second = engine.best_move_serial(&board, 3).expect("search succeeds");
    assert_eq!(first, second);
}

#[test]
fn no_legal_moves_is_an_error() {
    let engine = engine(2);
    let mated = board("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert_eq!(engine.best_move(&mated, 2), Err(SearchError::NoLegalMoves));
    let stalemate = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(engine.best_move_serial(&stalemate, 2), Err(SearchError::NoLegalMoves));
}

#[test]
fn zero_depth_is_an_error() {
    assert_eq!(engine(1).best_move(&Board::new(), 0), Err(SearchError::ZeroDepth));
}

/// Scorer that panics while armed.
struct TripwireScorer {
    armed: AtomicBool,
}

impl Scorer for TripwireScorer {
    fn score(&self, _board: &Board) -> i32 {
        if self.armed.load(Ordering::SeqCst) {
            panic!("tripwire");
        }
        0
    }
}

#[test]
fn failed_task_is_reported_and_engine_recovers() {
    let scorer = Arc::new(TripwireScorer {
        armed: AtomicBool::new(true),
    });
    let engine = Engine::with_components(
        EngineConfig::default().with_threads(2),
        Arc::clone(&scorer) as Arc<dyn Scorer>,
        Arc::new(IdentityOrdering),
        Arc::new(NullLogger),
    )
    .expect("worker threads spawn");

    let board = Board::new();
    match engine.best_move(&board, 2) {
        Err(SearchError::TaskFailed { .. }) => {}
        other => panic!("expected a failed task, got {other:?}"),
    }

    scorer.armed.store(false, Ordering::SeqCst);
    engine.reset();
    let result = engine.best_move(&board, 2).expect("pool still serves tasks");
    assert_eq!(result.score, 0);
}
