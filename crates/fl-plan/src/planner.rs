//! Planner trait and the time-expanded earliest-arrival search.
//!
//! # Search model
//!
//! A generalized Dijkstra over hubs in which the "distance" is the earliest
//! tick at which a drone can be at the hub given every reservation already
//! in the ledger.  Each hub keeps a single best-known arrival; once popped it
//! is final and never revisited.
//!
//! Moving into hub `n` over link `l` from a hub finalized at tick `t0`:
//!
//! ```text
//! base      = 1 tick, or 2 ticks if n is Restricted
//! tentative = t0 + base
//! slot      = first t ≥ tentative such that
//!               occ(l, t)   < cap(l)
//!               occ(l, t-1) < cap(l)        (Restricted n only)
//!               occ(n, t)   < cap(n)        (unless n is the End hub)
//! ```
//!
//! The gap between `tentative` and `slot` is time spent waiting at the
//! departure hub.  Blocked hubs are never entered and closed links
//! (capacity 0) are never crossed.

use tracing::debug;

use fl_core::{HubId, Tick};
use fl_graph::{Hub, HubGraph, Link};
use fl_ledger::CapacityLedger;

use crate::{Frontier, PlanError, PlanResult};

// ── SearchTree ────────────────────────────────────────────────────────────────

/// Result of a successful search: best arrival tick and predecessor for
/// every hub the search reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTree {
    pub start: HubId,
    pub end:   HubId,
    /// Indexed by `HubId`.  `None` for hubs never reached.
    pub arrival: Vec<Option<Tick>>,
    /// Indexed by `HubId`.  `HubId::INVALID` for the start and unreached hubs.
    pub pred: Vec<HubId>,
    /// Number of hubs finalized before the End hub was popped.
    pub expanded: usize,
}

impl SearchTree {
    #[inline]
    pub fn arrival(&self, hub: HubId) -> Option<Tick> {
        self.arrival.get(hub.index()).copied().flatten()
    }

    #[inline]
    pub fn predecessor(&self, hub: HubId) -> Option<HubId> {
        self.pred
            .get(hub.index())
            .copied()
            .filter(|&p| p != HubId::INVALID)
    }

    /// Arrival tick at the End hub.
    pub fn end_arrival(&self) -> Option<Tick> {
        self.arrival(self.end)
    }
}

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable single-drone search.
///
/// Implementations read the ledger but must not assume anything about how
/// the result is committed; [`reconstruct`](crate::reconstruct) does that.
pub trait Planner {
    /// Search from the Start hub at tick 0 towards the End hub.
    ///
    /// Returns [`PlanError::Unreachable`] if the End hub cannot be reached.
    fn plan(&self, graph: &HubGraph, ledger: &CapacityLedger) -> PlanResult<SearchTree>;
}

/// The default earliest-arrival planner described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeExpandedPlanner;

impl Planner for TimeExpandedPlanner {
    fn plan(&self, graph: &HubGraph, ledger: &CapacityLedger) -> PlanResult<SearchTree> {
        earliest_arrival(graph, ledger)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

fn earliest_arrival(graph: &HubGraph, ledger: &CapacityLedger) -> PlanResult<SearchTree> {
    let n = graph.hub_count();
    let (start, end) = (graph.start, graph.end);

    let mut arrival   = vec![None; n];
    let mut pred      = vec![HubId::INVALID; n];
    let mut finalized = vec![false; n];
    let mut expanded  = 0usize;

    let mut frontier = Frontier::new();
    arrival[start.index()] = Some(Tick::ZERO);
    frontier.push(Tick::ZERO, graph.start_hub().zone.weight(), start);

    while let Some(entry) = frontier.pop() {
        let hub = entry.hub;
        if finalized[hub.index()] {
            continue;
        }
        finalized[hub.index()] = true;
        expanded += 1;

        if hub == end {
            debug!(
                arrival = entry.key.tick.0,
                expanded,
                pushed = frontier.pushed(),
                "end hub reached"
            );
            return Ok(SearchTree { start, end, arrival, pred, expanded });
        }

        let now = entry.key.tick;
        for (link_id, next) in graph.neighbors(hub) {
            if finalized[next.index()] {
                continue;
            }
            let dest = graph.hub(next);
            if dest.zone.is_blocked() {
                finalized[next.index()] = true;
                continue;
            }
            let link = graph.link(link_id);
            if link.capacity < 1 {
                continue;
            }

            let tentative = now + dest.zone.transit_ticks();
            if arrival[next.index()].is_some_and(|best| best <= tentative) {
                continue;
            }
            let Some(slot) = first_free_slot(ledger, link, dest, tentative) else {
                continue;
            };
            if arrival[next.index()].is_some_and(|best| best <= slot) {
                continue;
            }

            arrival[next.index()] = Some(slot);
            pred[next.index()] = hub;
            frontier.push(slot, dest.zone.weight(), next);
        }
    }

    debug!(expanded, "frontier exhausted before end hub");
    Err(PlanError::Unreachable { start, end })
}

/// First tick `≥ from` at which `link` and `dest` can accept one more drone.
///
/// The scan stops at the first tick past every reservation on the resources
/// involved, where all occupancies are 0; `None` is only possible for a
/// zero-capacity hub, which graph construction rejects.
pub(crate) fn first_free_slot(
    ledger: &CapacityLedger,
    link:   &Link,
    dest:   &Hub,
    from:   Tick,
) -> Option<Tick> {
    let restricted = dest.zone.is_restricted();
    let link_clear = ledger
        .horizon(link.id)
        .map_or(0, |h| h.0 + if restricted { 2 } else { 1 });
    let hub_clear = if dest.is_end() {
        0
    } else {
        ledger.horizon(dest.id).map_or(0, |h| h.0 + 1)
    };
    let last = from.0.max(link_clear).max(hub_clear);

    (from.0..=last)
        .map(Tick)
        .find(|&t| slot_is_free(ledger, link, dest, t))
}

fn slot_is_free(ledger: &CapacityLedger, link: &Link, dest: &Hub, t: Tick) -> bool {
    if ledger.occupancy(link.id, t) >= link.capacity {
        return false;
    }
    if dest.zone.is_restricted() {
        if let Some(prev) = t.prev() {
            if ledger.occupancy(link.id, prev) >= link.capacity {
                return false;
            }
        }
    }
    dest.is_end() || ledger.occupancy(dest.id, t) < dest.capacity
}
