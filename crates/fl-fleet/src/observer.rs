//! Scheduler observer trait for progress reporting and data collection.

use fl_core::DroneId;
use fl_graph::HubGraph;
use fl_ledger::CapacityLedger;
use fl_plan::{PlanError, Trajectory};

/// Callbacks invoked by [`FleetScheduler::run`][crate::FleetScheduler::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait FleetObserver {
    /// Called after `trajectory` has been committed to the ledger.
    fn on_drone_scheduled(&mut self, _trajectory: &Trajectory) {}

    /// Called when `drone` cannot reach the End hub.  No further drones are
    /// scheduled after this.
    fn on_drone_unreachable(&mut self, _drone: DroneId, _cause: &PlanError) {}

    /// Called once when the run stops, successfully or not.
    fn on_fleet_end(
        &mut self,
        _graph:        &HubGraph,
        _trajectories: &[Trajectory],
        _ledger:       &CapacityLedger,
    ) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
