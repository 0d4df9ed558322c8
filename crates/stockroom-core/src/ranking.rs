//! # Ranking Heap
//!
//! Binary max-heap of `(rank, key)` records with a position index, so a
//! key's rank can be raised or lowered in place.
//!
//! ## Why a Position Index?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SNAPSHOT HEAP (one record per purchase)                                │
//! │                                                                         │
//! │    buy Laptop x2  → push (2, Laptop)                                    │
//! │    buy Laptop x3  → push (5, Laptop)                                    │
//! │    top(2)         → [(5, Laptop), (2, Laptop)]   stale duplicate!       │
//! │                                                                         │
//! │  LIVE HEAP (this module, one record per key)                            │
//! │                                                                         │
//! │    buy Laptop x2  → insert(2, Laptop)                                   │
//! │    buy Laptop x3  → insert(5, Laptop)  finds Laptop via positions,      │
//! │                                         updates rank, sifts up          │
//! │    top(2)         → [(5, Laptop)]                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//! Higher rank first. Equal ranks put the smaller key first, so the order is
//! total and repeated [`RankingHeap::top`] calls return identical results.
//!
//! ## Complexity
//! | Operation     | Cost      |
//! |---------------|-----------|
//! | `insert`      | O(log n)  |
//! | `extract_max` | O(log n)  |
//! | `peek`        | O(1)      |
//! | `top(k)`      | O(k log n)|

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// One ranked record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry<K> {
    pub rank: u64,
    pub key: K,
}

#[derive(Debug, Clone)]
pub struct RankingHeap<K> {
    entries: Vec<RankEntry<K>>,
    positions: HashMap<K, usize>,
}

impl<K> Default for RankingHeap<K> {
    fn default() -> Self {
        RankingHeap {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Copy + Ord + Hash> RankingHeap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `key` with `rank`, or moves an existing `key` to `rank`.
    ///
    /// Returns the previous rank when the key was already present.
    pub fn insert(&mut self, rank: u64, key: K) -> Option<u64> {
        match self.positions.get(&key).copied() {
            Some(pos) => {
                let previous = self.entries[pos].rank;
                self.entries[pos].rank = rank;
                if rank > previous {
                    self.sift_up(pos);
                } else {
                    self.sift_down(pos);
                }
                Some(previous)
            }
            None => {
                self.push(RankEntry { rank, key });
                None
            }
        }
    }

    /// Removes and returns the highest-ranked record.
    ///
    /// An empty heap yields `None`; that is the normal end of a drain.
    pub fn extract_max(&mut self) -> Option<RankEntry<K>> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(0, last);
        let top = self.entries.pop()?;
        self.positions.remove(&top.key);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    pub fn peek(&self) -> Option<RankEntry<K>> {
        self.entries.first().copied()
    }

    /// The `n` highest-ranked records, best first.
    ///
    /// Extracts up to `n` records and pushes them back, so the heap holds
    /// the same set afterwards.
    pub fn top(&mut self, n: usize) -> Vec<RankEntry<K>> {
        let taken: Vec<_> = (0..n).map_while(|_| self.extract_max()).collect();
        for entry in &taken {
            self.push(*entry);
        }
        taken
    }

    pub fn rank_of(&self, key: &K) -> Option<u64> {
        self.positions.get(key).map(|&pos| self.entries[pos].rank)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks the heap property and the position index.
    pub fn is_valid_heap(&self) -> bool {
        let ordered = (1..self.entries.len()).all(|i| !self.outranks(i, (i - 1) / 2));
        let indexed = self.positions.len() == self.entries.len()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, e)| self.positions.get(&e.key) == Some(&i));
        ordered && indexed
    }

    fn push(&mut self, entry: RankEntry<K>) {
        let pos = self.entries.len();
        self.positions.insert(entry.key, pos);
        self.entries.push(entry);
        self.sift_up(pos);
    }

    /// True when the record at `a` must sit above the record at `b`.
    fn outranks(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.entries[a], &self.entries[b]);
        a.rank > b.rank || (a.rank == b.rank && a.key < b.key)
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.outranks(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut best = pos;

            if left < len && self.outranks(left, best) {
                best = left;
            }
            if right < len && self.outranks(right, best) {
                best = right;
            }
            if best == pos {
                break;
            }

            self.swap(pos, best);
            pos = best;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].key, a);
        self.positions.insert(self.entries[b].key, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(heap: &mut RankingHeap<u32>) -> Vec<(u64, u32)> {
        std::iter::from_fn(|| heap.extract_max())
            .map(|e| (e.rank, e.key))
            .collect()
    }

    #[test]
    fn extracts_in_descending_rank_order() {
        let mut heap = RankingHeap::new();
        for (rank, key) in [(5, 1), (9, 2), (2, 3), (7, 4), (1, 5)] {
            heap.insert(rank, key);
            assert!(heap.is_valid_heap());
        }

        assert_eq!(heap.peek(), Some(RankEntry { rank: 9, key: 2 }));
        assert_eq!(
            drain(&mut heap),
            vec![(9, 2), (7, 4), (5, 1), (2, 3), (1, 5)]
        );
        assert!(heap.is_empty());
    }

    #[test]
    fn empty_heap_is_not_an_error() {
        let mut heap: RankingHeap<u32> = RankingHeap::new();
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.extract_max(), None);
        assert!(heap.top(3).is_empty());
    }

    #[test]
    fn reinserting_a_key_updates_in_place() {
        let mut heap = RankingHeap::new();
        heap.insert(2, 10u32);
        heap.insert(4, 20);

        assert_eq!(heap.insert(5, 10), Some(2));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.rank_of(&10), Some(5));
        assert_eq!(heap.peek().map(|e| e.key), Some(10));
        assert!(heap.is_valid_heap());
    }

    #[test]
    fn lowering_a_rank_sifts_down() {
        let mut heap = RankingHeap::new();
        for (rank, key) in [(10, 1u32), (8, 2), (6, 3), (4, 4)] {
            heap.insert(rank, key);
        }

        heap.insert(1, 1);
        assert!(heap.is_valid_heap());
        assert_eq!(heap.peek().map(|e| e.key), Some(2));
    }

    #[test]
    fn top_restores_the_heap() {
        let mut heap = RankingHeap::new();
        for (rank, key) in [(3, 1u32), (8, 2), (5, 3), (8, 4)] {
            heap.insert(rank, key);
        }

        let first = heap.top(2);
        let second = heap.top(2);
        assert_eq!(first, second);
        assert_eq!(heap.len(), 4);
        assert!(heap.is_valid_heap());
        assert!(first.iter().all(|e| e.rank == 8));
    }

    #[test]
    fn top_more_than_len_returns_everything() {
        let mut heap = RankingHeap::new();
        heap.insert(1, 1u32);
        heap.insert(2, 2);

        assert_eq!(heap.top(10).len(), 2);
        assert_eq!(heap.top(0).len(), 0);
    }
}
