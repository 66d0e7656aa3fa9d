//! Priority frontier for the time-expanded search.
//!
//! Hubs have no natural order, so every entry carries an explicit composite
//! key.  Entries pop in ascending `(tick, zone_weight, seq)` order:
//!
//! 1. earliest feasible arrival first;
//! 2. among equal ticks, the cheaper zone (Priority before Normal before
//!    Restricted);
//! 3. among equal ticks and zones, the entry pushed first.
//!
//! `seq` is unique per frontier, so the order is total and the search is
//! deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fl_core::{HubId, Tick};

/// Composite ordering key.  Field order is the comparison order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct FrontierKey {
    pub tick:   Tick,
    pub weight: u32,
    pub seq:    u64,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct FrontierEntry {
    pub key: FrontierKey,
    pub hub: HubId,
}

/// Min-heap of [`FrontierEntry`] with its own insertion counter.
#[derive(Debug, Default)]
pub struct Frontier {
    heap:     BinaryHeap<Reverse<FrontierEntry>>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `hub` for expansion at `tick`.  Stale duplicates are allowed;
    /// the planner skips hubs that are already finalized.
    pub fn push(&mut self, tick: Tick, weight: u32, hub: HubId) {
        let key = FrontierKey { tick, weight, seq: self.next_seq };
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry { key, hub }));
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(e)| e)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pushes so far, including entries already popped.
    pub fn pushed(&self) -> u64 {
        self.next_seq
    }
}
