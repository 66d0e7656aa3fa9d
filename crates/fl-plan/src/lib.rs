//! `fl-plan` — earliest-arrival search for one drone, and turning its result
//! into a committed, tick-by-tick trajectory.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`frontier`]    | `FrontierKey` `(tick, zone weight, seq)`, `Frontier`   |
//! | [`planner`]     | `Planner` trait, `TimeExpandedPlanner`, `SearchTree`   |
//! | [`reconstruct`] | `reconstruct` — predecessor chain → `Trajectory`       |
//! | [`trajectory`]  | `Waypoint`, `Trajectory`                               |
//! | [`error`]       | `PlanError`, `PlanResult<T>`                           |
//!
//! # Read / write split
//!
//! ```text
//! planner.plan(&graph, &ledger)            → SearchTree   (reads ledger)
//! reconstruct(&graph, &tree, &mut ledger)  → Trajectory   (writes ledger)
//! ```
//!
//! Exploration never reserves anything; only a finished path is committed.

pub mod error;
pub mod frontier;
pub mod planner;
pub mod reconstruct;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use frontier::{Frontier, FrontierEntry, FrontierKey};
pub use planner::{Planner, SearchTree, TimeExpandedPlanner};
pub use reconstruct::reconstruct;
pub use trajectory::{Trajectory, Waypoint};
