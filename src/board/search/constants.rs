//! Search score constants.

/// Score of a checkmated side, from its own point of view negated.
pub const MATE_SCORE: i32 = 100_000;

/// Bound wider than any reachable score; safe to negate.
pub const INFINITY: i32 = 1_000_000;

pub const DRAW_SCORE: i32 = 0;

/// Halfmove clock value at which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 100;
