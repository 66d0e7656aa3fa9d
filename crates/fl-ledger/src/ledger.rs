//! `CapacityLedger` — occupancy counters for hubs and links.
//!
//! # Layout
//!
//! One row per resource, one `u32` per tick, stored densely:
//!
//! ```text
//! hub_rows [hub ][tick]  = drones at hub during tick
//! link_rows[link][tick]  = drones transiting link during tick
//! ```
//!
//! Rows only grow when a reservation lands past their end, so a row's length
//! is always `horizon + 1` and reads past the end return 0.

use std::fmt;

use fl_core::{HubId, LinkId, Tick};

// ── ResourceId ────────────────────────────────────────────────────────────────

/// Anything with a per-tick capacity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceId {
    Hub(HubId),
    Link(LinkId),
}

impl ResourceId {
    pub fn kind(self) -> &'static str {
        match self {
            ResourceId::Hub(_)  => "hub",
            ResourceId::Link(_) => "link",
        }
    }
}

impl From<HubId> for ResourceId {
    fn from(id: HubId) -> Self {
        ResourceId::Hub(id)
    }
}

impl From<LinkId> for ResourceId {
    fn from(id: LinkId) -> Self {
        ResourceId::Link(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Hub(h)  => write!(f, "{h}"),
            ResourceId::Link(l) => write!(f, "{l}"),
        }
    }
}

/// One non-zero ledger record.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LedgerEntry {
    pub resource: ResourceId,
    pub tick:     Tick,
    pub count:    u32,
}

// ── CapacityLedger ────────────────────────────────────────────────────────────

/// Per-resource, per-tick occupancy counts.
///
/// `reserve` never checks capacity: deciding whether a slot is free is the
/// planner's job.  There is no release operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacityLedger {
    hub_rows:  Vec<Vec<u32>>,
    link_rows: Vec<Vec<u32>>,
    total:     u64,
}

impl CapacityLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the row tables for a graph with the given resource counts.
    pub fn with_resources(hubs: usize, links: usize) -> Self {
        Self {
            hub_rows:  vec![Vec::new(); hubs],
            link_rows: vec![Vec::new(); links],
            total:     0,
        }
    }

    /// Drones recorded on `resource` during `tick` (0 if never reserved).
    #[inline]
    pub fn occupancy(&self, resource: impl Into<ResourceId>, tick: Tick) -> u32 {
        self.row(resource.into())
            .and_then(|row| row.get(tick.index()))
            .copied()
            .unwrap_or(0)
    }

    /// Record one more drone on `resource` during `tick`.
    pub fn reserve(&mut self, resource: impl Into<ResourceId>, tick: Tick) {
        let row = self.row_mut(resource.into());
        if row.len() <= tick.index() {
            row.resize(tick.index() + 1, 0);
        }
        row[tick.index()] += 1;
        self.total += 1;
    }

    /// The last tick with a reservation on `resource`, or `None` if it has
    /// never been reserved.  Every later tick has occupancy 0.
    #[inline]
    pub fn horizon(&self, resource: impl Into<ResourceId>) -> Option<Tick> {
        self.row(resource.into())
            .and_then(|row| row.len().checked_sub(1))
            .map(|t| Tick(t as u64))
    }

    /// Total number of reservations committed so far.
    pub fn reservation_count(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Every non-zero record, hubs first (by id, then tick), then links.
    pub fn entries(&self) -> impl Iterator<Item = LedgerEntry> + '_ {
        let hubs = self.hub_rows.iter().enumerate().flat_map(|(i, row)| {
            non_zero(row).map(move |(t, count)| LedgerEntry {
                resource: ResourceId::Hub(HubId(i as u32)),
                tick: t,
                count,
            })
        });
        let links = self.link_rows.iter().enumerate().flat_map(|(i, row)| {
            non_zero(row).map(move |(t, count)| LedgerEntry {
                resource: ResourceId::Link(LinkId(i as u32)),
                tick: t,
                count,
            })
        });
        hubs.chain(links)
    }

    // ── Row access ────────────────────────────────────────────────────────

    fn row(&self, resource: ResourceId) -> Option<&Vec<u32>> {
        match resource {
            ResourceId::Hub(h)  => self.hub_rows.get(h.index()),
            ResourceId::Link(l) => self.link_rows.get(l.index()),
        }
    }

    fn row_mut(&mut self, resource: ResourceId) -> &mut Vec<u32> {
        let (rows, index) = match resource {
            ResourceId::Hub(h)  => (&mut self.hub_rows, h.index()),
            ResourceId::Link(l) => (&mut self.link_rows, l.index()),
        };
        if rows.len() <= index {
            rows.resize_with(index + 1, Vec::new);
        }
        &mut rows[index]
    }
}

fn non_zero(row: &[u32]) -> impl Iterator<Item = (Tick, u32)> + '_ {
    row.iter()
        .enumerate()
        .filter(|&(_, &c)| c > 0)
        .map(|(t, &c)| (Tick(t as u64), c))
}
