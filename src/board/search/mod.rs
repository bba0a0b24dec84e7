//! Alpha-beta search.
//!
//! - [`Searcher`] runs the recursive negamax on one board
//! - [`search_root`] and [`search_root_parallel`] drive the root move loop
//! - [`Scorer`] and [`MoveOrdering`] are injected evaluation and ordering
//!   strategies
//! - [`minimax`] is an unpruned reference used to check the search

pub mod constants;
mod log;
mod move_order;
mod negamax;
mod reference;
mod root;
mod scorer;

pub use self::log::{LogLogger, NullLogger, SearchInfo, SearchLogger};
pub use constants::{DRAW_SCORE, FIFTY_MOVE_LIMIT, INFINITY, MATE_SCORE};
pub use move_order::{
    CapturesFirstOrdering, IdentityOrdering, MoveOrdering, OrderingKind, ShuffleOrdering,
};
pub use negamax::Searcher;
pub use reference::{minimax, minimax_root};
pub use root::{search_root, search_root_parallel, SearchContext, SearchResult};
pub use scorer::{MaterialScorer, Scorer};
