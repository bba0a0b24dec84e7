//! Root move driver.
//!
//! The root is a single level: every legal first move is searched on its
//! own copy of the board, and the best score for the side to move wins.
//! Ties keep the move generated first.

use std::sync::Arc;
use std::time::Instant;

use super::super::{Board, Move, SearchError};
use super::constants::{DRAW_SCORE, FIFTY_MOVE_LIMIT, INFINITY};
use super::log::{SearchInfo, SearchLogger};
use super::move_order::MoveOrdering;
use super::negamax::Searcher;
use super::scorer::Scorer;
use crate::pool::WorkerPool;
use crate::tt::TranspositionTable;

/// Outcome of a root search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Centipawns from White's point of view
    pub score: i32,
    pub nodes: u64,
}

/// Shared collaborators of every search task.
#[derive(Clone)]
pub struct SearchContext {
    pub(crate) tt: Arc<TranspositionTable>,
    pub(crate) scorer: Arc<dyn Scorer>,
    pub(crate) ordering: Arc<dyn MoveOrdering>,
}

impl SearchContext {
    #[must_use]
    pub fn new(
        tt: Arc<TranspositionTable>,
        scorer: Arc<dyn Scorer>,
        ordering: Arc<dyn MoveOrdering>,
    ) -> Self {
        SearchContext { tt, scorer, ordering }
    }

    #[must_use]
    pub fn searcher(&self) -> Searcher {
        Searcher::new(
            Arc::clone(&self.tt),
            Arc::clone(&self.scorer),
            Arc::clone(&self.ordering),
        )
    }

    /// Score of the position after one root move, relative to the side that
    /// made it, plus the nodes visited.
    fn score_child(&self, mut child: Board, root_hash: u64, depth: u32) -> (i32, u64) {
        let mut searcher = self.searcher().with_history(&[root_hash]);
        let score = -searcher.search(&mut child, depth - 1, -INFINITY, INFINITY);
        (score, searcher.nodes())
    }
}

/// Each legal root move paired with a private copy of the resulting board.
fn root_children(board: &Board, depth: u32) -> Result<Vec<(Move, Board)>, SearchError> {
    if depth == 0 {
        return Err(SearchError::ZeroDepth);
    }
    let children: Vec<_> = board
        .generate_moves()
        .into_iter()
        .filter_map(|mv| {
            let mut child = board.clone();
            child.make_move(mv).map(|_| (mv, child))
        })
        .collect();
    if children.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    Ok(children)
}

/// A root already at the fifty-move limit is a draw whatever the children
/// score; the first legal move is still reported.
fn drawn_by_clock(board: &Board, children: &[(Move, Board)]) -> Option<SearchResult> {
    if board.halfmove_clock() < FIFTY_MOVE_LIMIT {
        return None;
    }
    log::debug!("root halfmove clock {} reached the fifty-move limit", board.halfmove_clock());
    children.first().map(|&(best_move, _)| SearchResult {
        best_move,
        score: DRAW_SCORE,
        nodes: 1,
    })
}

/// Pick the highest mover-relative score, first one on ties.
fn select_best(board: &Board, scored: &[(Move, i32, u64)]) -> Option<SearchResult> {
    let nodes = scored.iter().map(|&(_, _, n)| n).sum::<u64>() + 1;
    let mut best: Option<(Move, i32)> = None;
    for &(mv, score, _) in scored {
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }
    best.map(|(best_move, score)| SearchResult {
        best_move,
        score: score * board.side_to_move().sign(),
        nodes,
    })
}

fn report(
    logger: &dyn SearchLogger,
    ctx: &SearchContext,
    depth: u32,
    root_moves: usize,
    start: Instant,
    result: &SearchResult,
) {
    logger.info(&SearchInfo {
        depth,
        root_moves,
        nodes: result.nodes,
        time_ms: start.elapsed().as_millis(),
        best_move: result.best_move,
        score: result.score,
        hashfull: ctx.tt.hashfull_per_mille(),
    });
}

/// Root search on the calling thread.
pub fn search_root(
    ctx: &SearchContext,
    logger: &dyn SearchLogger,
    board: &Board,
    depth: u32,
) -> Result<SearchResult, SearchError> {
    let start = Instant::now();
    let children = root_children(board, depth)?;
    let root_moves = children.len();
    if let Some(result) = drawn_by_clock(board, &children) {
        report(logger, ctx, depth, root_moves, start, &result);
        return Ok(result);
    }
    let scored: Vec<_> = children
        .into_iter()
        .map(|(mv, child)| {
            let (score, nodes) = ctx.score_child(child, board.hash(), depth);
            (mv, score, nodes)
        })
        .collect();
    let result = select_best(board, &scored).ok_or(SearchError::NoLegalMoves)?;
    report(logger, ctx, depth, root_moves, start, &result);
    Ok(result)
}

/// Root search with one pool task per legal root move.
///
/// Selection waits for every task, so the result does not depend on the
/// order in which tasks finish. A failed task fails the whole search, but
/// only after its siblings have completed.
pub fn search_root_parallel(
    ctx: &SearchContext,
    logger: &dyn SearchLogger,
    pool: &WorkerPool,
    board: &Board,
    depth: u32,
) -> Result<SearchResult, SearchError> {
    let start = Instant::now();
    let children = root_children(board, depth)?;
    let root_moves = children.len();
    if let Some(result) = drawn_by_clock(board, &children) {
        report(logger, ctx, depth, root_moves, start, &result);
        return Ok(result);
    }
    let root_hash = board.hash();

    let handles: Vec<_> = children
        .into_iter()
        .map(|(mv, child)| {
            let task_ctx = ctx.clone();
            (mv, pool.submit(move || task_ctx.score_child(child, root_hash, depth)))
        })
        .collect();

    let outcomes: Vec<_> = handles
        .into_iter()
        .map(|(mv, handle)| (mv, handle.get()))
        .collect();

    let mut scored = Vec::with_capacity(outcomes.len());
    for (mv, outcome) in outcomes {
        match outcome {
            Ok((score, nodes)) => scored.push((mv, score, nodes)),
            Err(source) => {
                return Err(SearchError::TaskFailed {
                    mv: mv.to_string(),
                    source,
                })
            }
        }
    }
    let result = select_best(board, &scored).ok_or(SearchError::NoLegalMoves)?;
    log::debug!(
        "root search depth {depth}: {root_moves} moves over {} workers",
        pool.threads()
    );
    report(logger, ctx, depth, root_moves, start, &result);
    Ok(result)
}
