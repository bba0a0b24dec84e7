//! Property-based tests over random legal move sequences.

use proptest::prelude::*;

use crate::board::Board;

const FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
];

/// Plays the moves picked by `choices`, stopping early at a terminal position.
fn play_line(board: &mut Board, choices: &[usize]) -> Vec<(crate::board::Move, crate::board::Memento)> {
    let mut played = Vec::new();
    for &choice in choices {
        let legal = board.legal_moves();
        if legal.is_empty() {
            break;
        }
        let mv = legal[choice % legal.len()];
        let memento = board.make_move(mv).expect("legal move");
        played.push((mv, memento));
    }
    played
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn make_unmake_restores_board(
        fen_idx in 0..FENS.len(),
        choices in prop::collection::vec(any::<usize>(), 1..24),
    ) {
        let mut board = Board::from_fen(FENS[fen_idx]).expect("valid FEN");
        let original = board.clone();
        let played = play_line(&mut board, &choices);
        for (mv, memento) in played.into_iter().rev() {
            board.unmake_move(mv, memento);
        }
        prop_assert_eq!(board, original);
    }

    #[test]
    fn incremental_hash_matches_recomputation(
        fen_idx in 0..FENS.len(),
        choices in prop::collection::vec(any::<usize>(), 1..24),
    ) {
        let mut board = Board::from_fen(FENS[fen_idx]).expect("valid FEN");
        for &choice in &choices {
            let legal = board.legal_moves();
            if legal.is_empty() {
                break;
            }
            let mv = legal[choice % legal.len()];
            board.make_move(mv).expect("legal move");
            prop_assert_eq!(board.hash(), board.compute_hash());
            prop_assert!(board.validate().is_ok());
        }
    }

    #[test]
    fn fen_round_trip_after_random_line(
        fen_idx in 0..FENS.len(),
        choices in prop::collection::vec(any::<usize>(), 0..16),
    ) {
        let mut board = Board::from_fen(FENS[fen_idx]).expect("valid FEN");
        play_line(&mut board, &choices);
        let reparsed = Board::from_fen(&board.to_fen()).expect("own FEN parses");
        prop_assert_eq!(reparsed.to_fen(), board.to_fen());
        prop_assert_eq!(reparsed.hash(), board.hash());
    }
}
