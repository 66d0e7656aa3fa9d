//! The `OutputWriter` trait implemented by the backend writers.

use crate::{OccupancyRow, OutputResult, WaypointRow};

/// Implemented by the CSV and SQLite writers.
///
/// Errors surface through [`FleetOutputObserver::take_error`] when a writer
/// is driven by the scheduler.
///
/// [`FleetOutputObserver::take_error`]: crate::FleetOutputObserver::take_error
pub trait OutputWriter {
    /// Write the waypoints of one drone.
    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()>;

    /// Write the non-zero ledger entries.
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()>;

    /// Flush and close.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
