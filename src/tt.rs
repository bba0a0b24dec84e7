//! Transposition table for caching search results.
//!
//! Capacity is split into generational segments. Writes go to the newest
//! segment; once it is full a fresh segment is opened and, if the table is
//! at its segment limit, the oldest segment is dropped whole. Lookups scan
//! segments newest first, so the most recent result for a position wins.
//!
//! A single lock guards all segments. Callers never rely on an entry
//! surviving between `get` and `put`: every hit is re-validated through
//! alpha-beta bound semantics.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    depth: u32,
    score: i32,
    bound_type: BoundType,
}

impl TTEntry {
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }
}

type Segment = FxHashMap<u64, TTEntry>;

/// Counters sampled from a table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableStats {
    pub hits: u64,
    pub misses: u64,
    pub rotations: u64,
    pub entries: usize,
}

pub struct TranspositionTable {
    // oldest at the front, newest at the back
    segments: Mutex<VecDeque<Segment>>,
    max_segments: usize,
    entries_per_segment: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    rotations: AtomicU64,
}

impl TranspositionTable {
    /// A table of at most `segments` generations of `entries_per_segment`
    /// entries each. Both counts are clamped to at least one.
    #[must_use]
    pub fn new(segments: usize, entries_per_segment: usize) -> Self {
        let max_segments = segments.max(1);
        let entries_per_segment = entries_per_segment.max(1);
        let mut deque = VecDeque::with_capacity(max_segments + 1);
        deque.push_back(Self::new_segment(entries_per_segment));
        TranspositionTable {
            segments: Mutex::new(deque),
            max_segments,
            entries_per_segment,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
        }
    }

    fn new_segment(capacity: usize) -> Segment {
        FxHashMap::with_capacity_and_hasher(capacity, Default::default())
    }

    /// Total number of entries the table can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_segments * self.entries_per_segment
    }

    /// Most recent entry for `hash`, if any live segment holds one.
    pub fn get(&self, hash: u64) -> Option<TTEntry> {
        let found = self
            .segments
            .lock()
            .iter()
            .rev()
            .find_map(|segment| segment.get(&hash).copied());
        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Record a search result.
    ///
    /// If `hash` is already present, the entry is replaced in place only
    /// when `depth` is at least the stored depth; otherwise the new value
    /// is discarded.
    pub fn put(&self, hash: u64, depth: u32, score: i32, bound_type: BoundType) {
        let entry = TTEntry {
            depth,
            score,
            bound_type,
        };
        let mut segments = self.segments.lock();

        for segment in segments.iter_mut().rev() {
            if let Some(existing) = segment.get_mut(&hash) {
                if depth >= existing.depth {
                    *existing = entry;
                }
                return;
            }
        }

        let newest_full = segments
            .back()
            .map_or(true, |segment| segment.len() >= self.entries_per_segment);
        if newest_full {
            if segments.len() >= self.max_segments {
                let dropped = segments.pop_front().map_or(0, |segment| segment.len());
                log::trace!("transposition table dropped oldest segment ({dropped} entries)");
            }
            segments.push_back(Self::new_segment(self.entries_per_segment));
            self.rotations.fetch_add(1, Ordering::Relaxed);
        }
        if let Some(newest) = segments.back_mut() {
            newest.insert(hash, entry);
        }
    }

    /// Number of stored entries across all segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.lock().iter().map(|segment| segment.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live segments (at most the configured segment count).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.lock().len()
    }

    /// Fill level in permille of capacity.
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        ((self.len() * 1000) / self.capacity()) as u32
    }

    #[must_use]
    pub fn stats(&self) -> TableStats {
        TableStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&self) {
        let mut segments = self.segments.lock();
        segments.clear();
        segments.push_back(Self::new_segment(self.entries_per_segment));
        drop(segments);
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
        log::debug!("transposition table cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_store_and_probe() {
        let tt = TranspositionTable::new(3, 16);
        tt.put(0x1234_5678_9ABC_DEF0, 5, 100, BoundType::Exact);
        let entry = tt.get(0x1234_5678_9ABC_DEF0).expect("should find entry");
        assert_eq!(entry.depth(), 5);
        assert_eq!(entry.score(), 100);
        assert_eq!(entry.bound_type(), BoundType::Exact);
    }

    #[test]
    fn test_no_false_positives() {
        let tt = TranspositionTable::new(3, 16);
        tt.put(1, 5, 100, BoundType::Exact);
        assert!(tt.get(2).is_none());
        let stats = tt.stats();
        assert_eq!((stats.hits, stats.misses), (0, 1));
    }

    #[test]
    fn test_shallower_write_is_discarded() {
        let tt = TranspositionTable::new(2, 16);
        tt.put(7, 4, 50, BoundType::LowerBound);
        tt.put(7, 3, -20, BoundType::Exact);
        assert_eq!(tt.get(7).map(|e| e.score()), Some(50));
        tt.put(7, 4, 60, BoundType::UpperBound);
        let entry = tt.get(7).expect("present");
        assert_eq!((entry.score(), entry.bound_type()), (60, BoundType::UpperBound));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_replacement_happens_in_older_segment() {
        let tt = TranspositionTable::new(3, 2);
        tt.put(1, 1, 10, BoundType::Exact);
        tt.put(2, 1, 20, BoundType::Exact);
        tt.put(3, 1, 30, BoundType::Exact);
        assert_eq!(tt.segment_count(), 2);
        tt.put(1, 6, 11, BoundType::Exact);
        assert_eq!(tt.len(), 3);
        assert_eq!(tt.get(1).map(|e| (e.depth(), e.score())), Some((6, 11)));
    }

    #[test]
    fn test_oldest_segment_dropped_whole() {
        let tt = TranspositionTable::new(2, 2);
        for hash in 1..=4 {
            tt.put(hash, 1, hash as i32, BoundType::Exact);
        }
        assert_eq!(tt.segment_count(), 2);
        assert_eq!(tt.len(), 4);

        tt.put(5, 1, 5, BoundType::Exact);
        assert_eq!(tt.segment_count(), 2);
        assert!(tt.get(1).is_none());
        assert!(tt.get(2).is_none());
        for hash in 3..=5 {
            assert!(tt.get(hash).is_some(), "entry {hash} should survive");
        }
        assert!(tt.len() <= tt.capacity());
    }

    #[test]
    fn test_clear() {
        let tt = TranspositionTable::new(2, 8);
        for hash in 0..10 {
            tt.put(hash, 2, 0, BoundType::Exact);
        }
        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.segment_count(), 1);
        assert!(tt.get(3).is_none());
    }

    #[test]
    fn test_concurrent_writers_respect_capacity() {
        let tt = Arc::new(TranspositionTable::new(3, 64));
        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let tt = Arc::clone(&tt);
                thread::spawn(move || {
                    for i in 0..500u64 {
                        let hash = t << 32 | i;
                        tt.put(hash, (i % 5) as u32, i as i32, BoundType::Exact);
                        let _ = tt.get(hash);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("writer thread");
        }
        assert!(tt.len() <= tt.capacity());
        assert!(tt.hashfull_per_mille() <= 1000);
    }
}
