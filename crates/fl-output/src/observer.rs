//! `FleetOutputObserver<W>` — bridges `FleetObserver` to an `OutputWriter`.

use tracing::warn;

use fl_core::DroneId;
use fl_fleet::FleetObserver;
use fl_graph::HubGraph;
use fl_ledger::CapacityLedger;
use fl_plan::{PlanError, Trajectory};

use crate::rows::{OccupancyRow, WaypointRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FleetObserver`] that writes each committed trajectory as it is
/// scheduled, then the ledger occupancy once the run ends.
///
/// Observer callbacks return nothing, so writer errors are stored; check
/// [`take_error`][Self::take_error] after the run.
pub struct FleetOutputObserver<'g, W: OutputWriter> {
    writer:      W,
    graph:       &'g HubGraph,
    unreachable: Option<DroneId>,
    last_error:  Option<OutputError>,
}

impl<'g, W: OutputWriter> FleetOutputObserver<'g, W> {
    /// `graph` must be the graph the scheduler runs on; it resolves hub names.
    pub fn new(writer: W, graph: &'g HubGraph) -> Self {
        Self {
            writer,
            graph,
            unreachable: None,
            last_error:  None,
        }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// The drone the run stopped at, if it stopped early.
    pub fn unreachable(&self) -> Option<DroneId> {
        self.unreachable
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for FleetOutputObserver<'_, W> {
    fn on_drone_scheduled(&mut self, trajectory: &Trajectory) {
        let rows = WaypointRow::from_trajectory(self.graph, trajectory);
        let result = self.writer.write_waypoints(&rows);
        self.store_err(result);
    }

    fn on_drone_unreachable(&mut self, drone: DroneId, _cause: &PlanError) {
        self.unreachable = Some(drone);
    }

    fn on_fleet_end(&mut self, graph: &HubGraph, _trajectories: &[Trajectory], ledger: &CapacityLedger) {
        let rows = OccupancyRow::from_ledger(graph, ledger);
        let result = self.writer.write_occupancy(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
