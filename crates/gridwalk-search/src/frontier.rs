//! Min-cost frontier with deterministic tie-breaking.
//!
//! Entries are never updated in place. A state whose best known cost
//! improves is pushed again, and the superseded entry is skipped when it
//! surfaces (the caller checks its finalized set). Ties on cost pop in
//! insertion order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::state::SearchState;

/// Ordering key: cost first, then insertion sequence.
type FrontierKey = (u64, u64);

/// A frontier entry wrapping a state with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop
/// the cheapest (and, among equals, oldest) entry first.
#[derive(Debug)]
struct FrontierEntry<R> {
    key: Reverse<FrontierKey>,
    state: SearchState<R>,
}

impl<R> PartialEq for FrontierEntry<R> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<R> Eq for FrontierEntry<R> {}

impl<R> PartialOrd for FrontierEntry<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R> Ord for FrontierEntry<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Frontier of discovered, not-yet-finalized states.
///
/// Maintains:
/// - a `BinaryHeap` for O(log n) pop of the cheapest state
/// - a monotone sequence counter for FIFO tie-breaks
/// - a high-water mark of the heap size
pub struct Frontier<R> {
    heap: BinaryHeap<FrontierEntry<R>>,
    next_seq: u64,
    high_water: u64,
}

impl<R> Frontier<R> {
    /// Create a new empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Push `state` with tentative cost `cost`.
    pub fn push(&mut self, state: SearchState<R>, cost: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            key: Reverse((cost, seq)),
            state,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the cheapest entry as `(cost, state)`.
    pub fn pop(&mut self) -> Option<(u64, SearchState<R>)> {
        self.heap.pop().map(|e| (e.key.0 .0, e.state))
    }

    /// Current number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl<R> Default for Frontier<R> {
    fn default() -> Self {
        Self::new()
    }
}
