//! SQLite output backend (feature `sqlite`).
//!
//! Creates `fleet.db` in the output directory with two tables:
//! `trajectories` and `occupancy`.

use std::path::Path;

use rusqlite::Connection;

use crate::{OccupancyRow, OutputResult, WaypointRow};
use crate::writer::OutputWriter;

pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `fleet.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("fleet.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trajectories (
                 drone_id   INTEGER NOT NULL,
                 tick       INTEGER NOT NULL,
                 hub        TEXT    NOT NULL,
                 to_hub     TEXT,
                 in_transit INTEGER NOT NULL,
                 PRIMARY KEY (drone_id, tick)
             );
             CREATE TABLE IF NOT EXISTS occupancy (
                 resource TEXT    NOT NULL,
                 kind     TEXT    NOT NULL,
                 tick     INTEGER NOT NULL,
                 count    INTEGER NOT NULL,
                 capacity INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_waypoints(&mut self, rows: &[WaypointRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trajectories (drone_id, tick, hub, to_hub, in_transit) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                let to_hub = (!row.to_hub.is_empty()).then_some(row.to_hub.as_str());
                stmt.execute(rusqlite::params![
                    row.drone_id,
                    row.tick as i64,
                    row.hub,
                    to_hub,
                    row.in_transit as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO occupancy (resource, kind, tick, count, capacity) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.resource,
                    row.kind,
                    row.tick as i64,
                    row.count,
                    row.capacity,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
