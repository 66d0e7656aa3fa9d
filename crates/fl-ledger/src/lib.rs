//! `fl-ledger` — the capacity ledger.
//!
//! The ledger is the only mutable state shared between drones.  The planner
//! reads it; the path reconstructor is the only writer.  Reservations are
//! permanent for the lifetime of a scheduling run.
//!
//! # Sparse-by-convention
//!
//! A `(resource, tick)` pair that was never reserved has occupancy 0.  Every
//! resource therefore has a *horizon* (its last reserved tick) past which all
//! ticks are free, which is what bounds the planner's slot search.

pub mod ledger;


pub use ledger::{CapacityLedger, LedgerEntry, ResourceId};
