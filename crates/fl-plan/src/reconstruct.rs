//! Predecessor chain → committed trajectory.
//!
//! Walking back from the End hub, each step `from (Tc) → current (T)` emits,
//! newest first:
//!
//! ```text
//! At(current)                 tick T      hub current, link reserved at T
//! Transit{from, current}      tick T-1    link reserved at T-1 (Restricted only)
//! At(from) × waits            ticks Tc+1 ..= T-base, hub from reserved each tick
//! ```
//!
//! After the Start hub is reached, `At(start)` is appended for tick 0 and
//! the list is reversed.  The Start hub's tick-0 slot is never reserved.

use tracing::{debug, warn};

use fl_core::{DroneId, Tick};
use fl_graph::HubGraph;
use fl_ledger::CapacityLedger;

use crate::{PlanError, PlanResult, SearchTree, Trajectory, Waypoint};

/// Expand `tree` into a trajectory for `drone` and commit every reservation
/// it implies into `ledger`.
///
/// This is the only code path that writes to the ledger.
pub fn reconstruct(
    graph:  &HubGraph,
    tree:   &SearchTree,
    ledger: &mut CapacityLedger,
    drone:  DroneId,
) -> PlanResult<Trajectory> {
    let mut current = tree.end;
    let mut t = tree
        .end_arrival()
        .ok_or(PlanError::BrokenChain { hub: tree.end })?;

    let mut rev: Vec<Waypoint> = Vec::with_capacity(t.index() + 1);

    while current != tree.start {
        let broken = PlanError::BrokenChain { hub: current };
        let from = tree.predecessor(current).ok_or_else(|| broken.clone())?;
        let from_arrival = tree.arrival(from).ok_or_else(|| broken.clone())?;
        let link = graph.link_between(from, current).ok_or_else(|| broken.clone())?;
        let zone = graph.hub(current).zone;

        // Last tick the drone is still at `from`.
        let depart = t
            .0
            .checked_sub(zone.transit_ticks())
            .filter(|&d| d >= from_arrival.0)
            .ok_or(broken)?;

        ledger.reserve(current, t);
        rev.push(Waypoint::At(current));

        ledger.reserve(link, t);
        if zone.is_restricted() {
            let mid = Tick(t.0 - 1);
            ledger.reserve(link, mid);
            rev.push(Waypoint::Transit { from, to: current });
        }

        for k in (from_arrival.0 + 1..=depart).rev() {
            let tick = Tick(k);
            ledger.reserve(from, tick);
            rev.push(Waypoint::At(from));

            let hub = graph.hub(from);
            let occupied = ledger.occupancy(from, tick);
            if occupied > hub.capacity && !hub.is_start() {
                warn!(
                    drone = drone.0,
                    hub = %hub.name,
                    tick = k,
                    occupied,
                    capacity = hub.capacity,
                    "waiting drone exceeds hub capacity"
                );
            }
        }

        current = from;
        t = from_arrival;
    }

    rev.push(Waypoint::At(tree.start));
    rev.reverse();

    let trajectory = Trajectory::new(drone, rev);
    debug!(
        drone = drone.0,
        arrival = trajectory.arrival_tick().0,
        waits = trajectory.wait_ticks(),
        "trajectory committed"
    );
    Ok(trajectory)
}
