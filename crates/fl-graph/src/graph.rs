//! Immutable routing graph.
//!
//! # Data layout
//!
//! Links are undirected, but adjacency is stored as **Compressed Sparse Row**
//! over directed half-edges: every link contributes `a → b` and `b → a`.
//! The half-edges of hub `h` occupy
//!
//! ```text
//! adj_link[ hub_out_start[h] .. hub_out_start[h+1] ]
//! adj_hub [ hub_out_start[h] .. hub_out_start[h+1] ]
//! ```
//!
//! in link insertion order, so neighbour iteration is a contiguous scan and
//! the planner's exploration order is reproducible across runs.

use rustc_hash::FxHashMap;

use fl_core::{HubId, HubRole, LinkId, ZoneKind};

// ── Hub / Link ────────────────────────────────────────────────────────────────

/// A location drones can occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hub {
    pub id:       HubId,
    pub name:     String,
    /// Map coordinates.  Presentation only; the planner never reads them.
    pub x:        i64,
    pub y:        i64,
    pub role:     HubRole,
    pub zone:     ZoneKind,
    /// Maximum drones at this hub during one tick.  Ignored for the End hub.
    pub capacity: u32,
    /// Optional display colour from the map file.
    pub color:    Option<String>,
}

impl Hub {
    #[inline]
    pub fn is_end(&self) -> bool {
        self.role == HubRole::End
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.role == HubRole::Start
    }
}

/// An undirected connection between two distinct hubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub id:       LinkId,
    pub a:        HubId,
    pub b:        HubId,
    /// Maximum drones in transit on this link during one tick.  A capacity
    /// of 0 closes the link.
    pub capacity: u32,
}

impl Link {
    /// The endpoint that is not `hub`.
    #[inline]
    pub fn other(&self, hub: HubId) -> HubId {
        if self.a == hub { self.b } else { self.a }
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Coordinate extents of all hubs, kept for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl Bounds {
    pub fn point(x: i64, y: i64) -> Self {
        Self { x_min: x, x_max: x, y_min: y, y_max: y }
    }

    pub fn include(&mut self, x: i64, y: i64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    pub fn width(&self) -> i64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> i64 {
        self.y_max - self.y_min
    }
}

// ── HubGraph ──────────────────────────────────────────────────────────────────

/// Validated, read-only topology plus the requested fleet size.
///
/// Construct with [`HubGraphBuilder`](crate::HubGraphBuilder).
#[derive(Debug, Clone)]
pub struct HubGraph {
    /// Map name (the source file path when loaded from disk).
    pub name: String,

    /// Hub table indexed by `HubId`.
    pub hubs: Vec<Hub>,

    /// Link table indexed by `LinkId`.
    pub links: Vec<Link>,

    pub start: HubId,
    pub end:   HubId,

    /// Number of drones to route (≥ 1).
    pub drone_count: u32,

    /// `None` only for a graph without hubs, which `build` never produces.
    pub bounds: Option<Bounds>,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    pub(crate) hub_out_start: Vec<u32>,
    pub(crate) adj_link:      Vec<LinkId>,
    pub(crate) adj_hub:       Vec<HubId>,

    // ── Lookup tables ─────────────────────────────────────────────────────
    pub(crate) name_index: FxHashMap<String, HubId>,
    pub(crate) pair_index: FxHashMap<(HubId, HubId), LinkId>,
}

impl HubGraph {
    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn hub(&self, id: HubId) -> &Hub {
        &self.hubs[id.index()]
    }

    #[inline]
    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.index()]
    }

    pub fn start_hub(&self) -> &Hub {
        self.hub(self.start)
    }

    pub fn end_hub(&self) -> &Hub {
        self.hub(self.end)
    }

    /// Resolve a hub name to its id.
    pub fn hub_id(&self, name: &str) -> Option<HubId> {
        self.name_index.get(name).copied()
    }

    pub fn hub_by_name(&self, name: &str) -> Option<&Hub> {
        self.hub_id(name).map(|id| self.hub(id))
    }

    /// `(link, neighbour)` pairs for every link touching `hub`, in link
    /// insertion order.
    #[inline]
    pub fn neighbors(&self, hub: HubId) -> impl Iterator<Item = (LinkId, HubId)> + '_ {
        let start = self.hub_out_start[hub.index()] as usize;
        let end   = self.hub_out_start[hub.index() + 1] as usize;
        (start..end).map(|i| (self.adj_link[i], self.adj_hub[i]))
    }

    /// Number of links touching `hub`.
    #[inline]
    pub fn degree(&self, hub: HubId) -> usize {
        let start = self.hub_out_start[hub.index()] as usize;
        let end   = self.hub_out_start[hub.index() + 1] as usize;
        end - start
    }

    /// The unique link joining `a` and `b`, in either orientation.
    pub fn link_between(&self, a: HubId, b: HubId) -> Option<LinkId> {
        self.pair_index.get(&pair_key(a, b)).copied()
    }
}

/// Order-independent key for an unordered hub pair.
#[inline]
pub(crate) fn pair_key(a: HubId, b: HubId) -> (HubId, HubId) {
    if a <= b { (a, b) } else { (b, a) }
}
