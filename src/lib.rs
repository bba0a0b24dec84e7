//! Chess engine core: bitboard position with make/unmake, pseudo-legal move
//! generation, Zobrist hashing, a generational transposition table, and
//! alpha-beta search with root moves spread over a worker pool.
//!
//! # Example
//! ```
//! use rookery::{Board, Engine, EngineConfig};
//!
//! let engine = Engine::new(EngineConfig::default().with_threads(2)).expect("engine");
//! let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("valid FEN");
//! let result = engine.best_move(&board, 2).expect("search");
//! assert_eq!(result.best_move.to_string(), "a1a8");
//! ```

pub mod board;
pub mod engine;
pub mod pool;
pub mod tt;
mod zobrist;

pub use board::search::{MoveOrdering, Scorer, SearchResult};
pub use board::{Board, Color, Memento, Move, Piece, Square};
pub use engine::{Engine, EngineConfig};
pub use pool::{TaskError, TaskHandle, WorkerPool};
pub use tt::{BoundType, TTEntry, TranspositionTable};
