//! Per-drone, tick-indexed trajectories.

use std::fmt;

use fl_core::{DroneId, HubId, Tick};
use fl_graph::HubGraph;

/// Where a drone is during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Waypoint {
    /// Resting at, or just arrived at, a hub.
    At(HubId),
    /// First tick of a two-tick move into a Restricted hub; the drone is on
    /// the link between `from` and `to`.
    Transit { from: HubId, to: HubId },
}

impl Waypoint {
    /// The hub occupied, or `None` while in transit.
    pub fn hub(self) -> Option<HubId> {
        match self {
            Waypoint::At(h) => Some(h),
            Waypoint::Transit { .. } => None,
        }
    }

    pub fn is_transit(self) -> bool {
        matches!(self, Waypoint::Transit { .. })
    }

    /// Human-readable form using hub names: `name` or `from-to`.
    pub fn label(self, graph: &HubGraph) -> String {
        match self {
            Waypoint::At(h) => graph.hub(h).name.clone(),
            Waypoint::Transit { from, to } => {
                format!("{}-{}", graph.hub(from).name, graph.hub(to).name)
            }
        }
    }
}

/// The full schedule of one drone: entry `i` is its position during tick `i`.
///
/// Entry 0 is always the Start hub and the last entry is the End hub.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trajectory {
    pub drone:     DroneId,
    pub waypoints: Vec<Waypoint>,
}

impl Trajectory {
    pub fn new(drone: DroneId, waypoints: Vec<Waypoint>) -> Self {
        Self { drone, waypoints }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Tick at which the drone reaches its final waypoint.
    pub fn arrival_tick(&self) -> Tick {
        Tick(self.waypoints.len().saturating_sub(1) as u64)
    }

    pub fn at(&self, tick: Tick) -> Option<Waypoint> {
        self.waypoints.get(tick.index()).copied()
    }

    /// `(tick, waypoint)` pairs from tick 0.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, Waypoint)> + '_ {
        self.waypoints
            .iter()
            .enumerate()
            .map(|(t, &w)| (Tick(t as u64), w))
    }

    /// Whether the drone's position changes between `tick - 1` and `tick`.
    pub fn moves_at(&self, tick: Tick) -> bool {
        match (tick.prev().and_then(|p| self.at(p)), self.at(tick)) {
            (Some(before), Some(now)) => before != now,
            _ => false,
        }
    }

    /// Number of ticks spent waiting (position unchanged from the tick before).
    pub fn wait_ticks(&self) -> usize {
        self.waypoints.windows(2).filter(|w| w[0] == w[1]).count()
    }

    pub fn visits(&self, hub: HubId) -> bool {
        self.waypoints.iter().any(|w| match *w {
            Waypoint::At(h) => h == hub,
            Waypoint::Transit { from, to } => from == hub || to == hub,
        })
    }

    /// Borrow the trajectory together with a graph for name-based display.
    pub fn display<'a>(&'a self, graph: &'a HubGraph) -> TrajectoryDisplay<'a> {
        TrajectoryDisplay { trajectory: self, graph }
    }
}

/// `D1: s(0) a(1) a-r(2) r(3) e(4)`
pub struct TrajectoryDisplay<'a> {
    trajectory: &'a Trajectory,
    graph:      &'a HubGraph,
}

impl fmt::Display for TrajectoryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.trajectory.drone.label())?;
        for (tick, w) in self.trajectory.iter() {
            write!(f, " {}({})", w.label(self.graph), tick.0)?;
        }
        Ok(())
    }
}
