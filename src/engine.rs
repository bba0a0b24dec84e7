//! Engine facade: configuration, owned collaborators and the worker pool.

use std::io;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::search::{
    search_root, search_root_parallel, LogLogger, MaterialScorer, MoveOrdering, OrderingKind,
    Scorer, SearchContext, SearchLogger, SearchResult,
};
use crate::board::{Board, SearchError};
use crate::pool::{default_threads, WorkerPool};
use crate::tt::TranspositionTable;

pub const DEFAULT_TT_SEGMENTS: usize = 3;
pub const DEFAULT_TT_ENTRIES_PER_SEGMENT: usize = 102_400;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Worker threads for root move tasks
    pub threads: usize,
    /// Generations kept by the transposition table
    pub tt_segments: usize,
    pub tt_entries_per_segment: usize,
    pub ordering: OrderingKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            threads: default_threads(),
            tt_segments: DEFAULT_TT_SEGMENTS,
            tt_entries_per_segment: DEFAULT_TT_ENTRIES_PER_SEGMENT,
            ordering: OrderingKind::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    #[must_use]
    pub fn with_tt_segments(mut self, segments: usize) -> Self {
        self.tt_segments = segments.max(1);
        self
    }

    #[must_use]
    pub fn with_tt_entries_per_segment(mut self, entries: usize) -> Self {
        self.tt_entries_per_segment = entries.max(1);
        self
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: OrderingKind) -> Self {
        self.ordering = ordering;
        self
    }
}

/// Searches positions for the best move.
///
/// Owns the transposition table shared by all searches, the injected
/// scorer, ordering and logger, and the worker pool that runs root moves.
pub struct Engine {
    config: EngineConfig,
    ctx: SearchContext,
    logger: Arc<dyn SearchLogger>,
    pool: WorkerPool,
}

impl Engine {
    /// Engine with material scoring, the configured ordering and a logger
    /// forwarding to the `log` facade.
    pub fn new(config: EngineConfig) -> io::Result<Self> {
        let ordering = config.ordering.build();
        Self::with_components(config, Arc::new(MaterialScorer), ordering, Arc::new(LogLogger))
    }

    pub fn with_components(
        config: EngineConfig,
        scorer: Arc<dyn Scorer>,
        ordering: Arc<dyn MoveOrdering>,
        logger: Arc<dyn SearchLogger>,
    ) -> io::Result<Self> {
        let tt = Arc::new(TranspositionTable::new(
            config.tt_segments,
            config.tt_entries_per_segment,
        ));
        let pool = WorkerPool::new(config.threads)?;
        Ok(Engine {
            config,
            ctx: SearchContext::new(tt, scorer, ordering),
            logger,
            pool,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.ctx.tt
    }

    /// Best move for the side to move at `depth` plies, searching root
    /// moves on the worker pool.
    pub fn best_move(&self, board: &Board, depth: u32) -> Result<SearchResult, SearchError> {
        search_root_parallel(&self.ctx, self.logger.as_ref(), &self.pool, board, depth)
    }

    /// Same as [`Engine::best_move`] but on the calling thread.
    pub fn best_move_serial(&self, board: &Board, depth: u32) -> Result<SearchResult, SearchError> {
        search_root(&self.ctx, self.logger.as_ref(), board, depth)
    }

    /// Forget all cached search results, e.g. between games.
    pub fn reset(&self) {
        self.ctx.tt.clear();
    }
}
