//! Move ordering strategies.
//!
//! Ordering only affects how early alpha-beta cutoffs happen; search
//! results are the same under every strategy.

use std::cmp::Reverse;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::Move;
use super::scorer::MaterialScorer;

/// Reorders generated moves in place before they are searched.
pub trait MoveOrdering: Send + Sync {
    fn reorder(&self, moves: &mut [Move]);
}

/// Leaves moves in generation order.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityOrdering;

impl MoveOrdering for IdentityOrdering {
    fn reorder(&self, _moves: &mut [Move]) {}
}

/// Captures (most valuable victim, least valuable attacker) and promotions
/// first, quiet moves after in generation order.
#[derive(Clone, Copy, Debug, Default)]
pub struct CapturesFirstOrdering;

impl CapturesFirstOrdering {
    fn priority(mv: &Move) -> i32 {
        let victim = mv.captured().map_or(0, MaterialScorer::value);
        let promotion = mv.promotion().map_or(0, MaterialScorer::value);
        if victim == 0 && promotion == 0 {
            return 0;
        }
        victim * 16 + promotion - mv.piece() as i32
    }
}

impl MoveOrdering for CapturesFirstOrdering {
    fn reorder(&self, moves: &mut [Move]) {
        moves.sort_by_key(|mv| Reverse(Self::priority(mv)));
    }
}

/// Random permutation from a seeded generator.
pub struct ShuffleOrdering {
    rng: Mutex<StdRng>,
}

impl ShuffleOrdering {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        ShuffleOrdering {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl MoveOrdering for ShuffleOrdering {
    fn reorder(&self, moves: &mut [Move]) {
        moves.shuffle(&mut *self.rng.lock());
    }
}

/// Configurable choice of ordering strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrderingKind {
    #[default]
    Identity,
    CapturesFirst,
    Shuffle {
        seed: u64,
    },
}

impl OrderingKind {
    #[must_use]
    pub fn build(self) -> std::sync::Arc<dyn MoveOrdering> {
        match self {
            OrderingKind::Identity => std::sync::Arc::new(IdentityOrdering),
            OrderingKind::CapturesFirst => std::sync::Arc::new(CapturesFirstOrdering),
            OrderingKind::Shuffle { seed } => std::sync::Arc::new(ShuffleOrdering::new(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_captures_first_puts_best_capture_first() {
        let board = Board::from_fen("4k3/8/3q1r2/4P3/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        let mut moves = board.generate_moves();
        CapturesFirstOrdering.reorder(moves.as_mut_slice());
        assert_eq!(moves[0].to().to_string(), "d6");
        assert_eq!(moves[1].to().to_string(), "f6");
        assert!(!moves[2].is_capture());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let board = Board::new();
        let original = board.generate_moves();
        let mut shuffled = original.clone();
        ShuffleOrdering::new(7).reorder(shuffled.as_mut_slice());
        assert_eq!(shuffled.len(), original.len());
        for mv in original.iter() {
            assert!(shuffled.contains(mv));
        }
    }

    #[test]
    fn test_identity_keeps_order() {
        let board = Board::new();
        let original = board.generate_moves();
        let mut same = original.clone();
        IdentityOrdering.reorder(same.as_mut_slice());
        assert_eq!(same.as_slice(), original.as_slice());
    }
}
