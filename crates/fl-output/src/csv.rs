//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `trajectories.csv`
//! - `occupancy.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OccupancyRow, OutputResult, WaypointRow};
use crate::writer::OutputWriter;

pub struct CsvWriter {
    trajectories: Writer<File>,
    occupancy:    Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create both files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectories = Writer::from_path(dir.join("trajectories.csv"))?;
        trajectories.write_record(["drone_id", "tick", "hub", "to_hub", "in_transit"])?;

        let mut occupancy = Writer::from_path(dir.join("occupancy.csv"))?;
        occupancy.write_record(["resource", "kind", "tick", "count", "capacity"])?;

        Ok(Self {
            trajectories,
            occupancy,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()> {
        for row in rows {
            self.trajectories.write_record(&[
                row.drone_id.to_string(),
                row.tick.to_string(),
                row.hub.clone(),
                row.to_hub.clone(),
                (row.in_transit as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        for row in rows {
            self.occupancy.write_record(&[
                row.resource.clone(),
                row.kind.to_owned(),
                row.tick.to_string(),
                row.count.to_string(),
                row.capacity.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectories.flush()?;
        self.occupancy.flush()?;
        Ok(())
    }
}
