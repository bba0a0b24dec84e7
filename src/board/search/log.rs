//! Search progress reporting.
//!
//! The engine is handed a logger at construction instead of writing to a
//! global sink itself.

use super::super::Move;

/// Summary of one completed root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub root_moves: usize,
    pub nodes: u64,
    pub time_ms: u128,
    pub best_move: Move,
    /// Centipawns from White's point of view
    pub score: i32,
    pub hashfull: u32,
}

pub trait SearchLogger: Send + Sync {
    fn info(&self, info: &SearchInfo);
}

/// Forwards reports to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogLogger;

impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        log::info!(
            "depth {} moves {} nodes {} time {}ms hashfull {} best {} score {}",
            info.depth,
            info.root_moves,
            info.nodes,
            info.time_ms,
            info.hashfull,
            info.best_move,
            info.score
        );
    }
}

/// Discards every report.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl SearchLogger for NullLogger {
    fn info(&self, _info: &SearchInfo) {}
}
