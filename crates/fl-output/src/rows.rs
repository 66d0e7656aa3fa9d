//! Plain data row types written by output backends.

use fl_graph::HubGraph;
use fl_ledger::{CapacityLedger, ResourceId};
use fl_plan::{Trajectory, Waypoint};

/// One drone's position during one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointRow {
    pub drone_id:   u32,
    pub tick:       u64,
    /// The hub occupied, or the hub being left while in transit.
    pub hub:        String,
    /// Destination while in transit; empty otherwise.
    pub to_hub:     String,
    pub in_transit: bool,
}

impl WaypointRow {
    /// One row per tick of `trajectory`.
    pub fn from_trajectory(graph: &HubGraph, trajectory: &Trajectory) -> Vec<Self> {
        trajectory
            .iter()
            .map(|(tick, w)| {
                let (hub, to_hub) = match w {
                    Waypoint::At(h) => (graph.hub(h).name.clone(), String::new()),
                    Waypoint::Transit { from, to } => {
                        (graph.hub(from).name.clone(), graph.hub(to).name.clone())
                    }
                };
                WaypointRow {
                    drone_id: trajectory.drone.0,
                    tick: tick.0,
                    hub,
                    to_hub,
                    in_transit: w.is_transit(),
                }
            })
            .collect()
    }
}

/// Reservation count of one hub or link at one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyRow {
    /// Hub name, or `a-b` for a link.
    pub resource: String,
    /// `"hub"` or `"link"`.
    pub kind:     &'static str,
    pub tick:     u64,
    pub count:    u32,
    pub capacity: u32,
}

impl OccupancyRow {
    /// Every non-zero ledger cell, hubs first.
    pub fn from_ledger(graph: &HubGraph, ledger: &CapacityLedger) -> Vec<Self> {
        ledger
            .entries()
            .map(|e| {
                let (resource, capacity) = match e.resource {
                    ResourceId::Hub(h) => {
                        let hub = graph.hub(h);
                        (hub.name.clone(), hub.capacity)
                    }
                    ResourceId::Link(l) => {
                        let link = graph.link(l);
                        let name = format!("{}-{}", graph.hub(link.a).name, graph.hub(link.b).name);
                        (name, link.capacity)
                    }
                };
                OccupancyRow {
                    resource,
                    kind: e.resource.kind(),
                    tick: e.tick.0,
                    count: e.count,
                    capacity,
                }
            })
            .collect()
    }
}
