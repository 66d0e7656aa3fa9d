//! `fl-output` — writers for scheduled fleets.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                         |
//! |-----------|---------|---------------------------------------|
//! | *(none)*  | CSV     | `trajectories.csv`, `occupancy.csv`   |
//! | `sqlite`  | SQLite  | `fleet.db`                            |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`FleetOutputObserver`], which implements `fl_fleet::FleetObserver`.
//! [`TurnLog`] renders the human-readable per-turn move listing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fl_output::{CsvWriter, FleetOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FleetOutputObserver::new(writer, &graph);
//! scheduler.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod rows;
pub mod turns;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FleetOutputObserver;
pub use rows::{OccupancyRow, WaypointRow};
pub use turns::TurnLog;
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
