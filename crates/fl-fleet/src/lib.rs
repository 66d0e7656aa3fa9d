//! `fl-fleet` — greedy, sequential scheduling of the whole fleet.
//!
//! # Scheduling loop
//!
//! ```text
//! ledger = empty
//! for drone in 1..=graph.drone_count:
//!   ① Plan        — planner.plan(&graph, &ledger)          (read-only)
//!   ② Reconstruct — reconstruct(&graph, &tree, &mut ledger) (commit)
//!   ③ Record      — append the trajectory, notify observer
//! stop at the first drone whose End hub is unreachable
//! ```
//!
//! Every drone sees all reservations of the drones before it, so the order
//! is fixed and the loop cannot be parallelized.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fl_fleet::schedule_fleet;
//!
//! let graph = fl_map::load_map_file(path)?;
//! match schedule_fleet(&graph) {
//!     Ok(trajectories) => { /* every drone routed */ }
//!     Err(failure)     => { /* failure.completed holds the routed prefix */ }
//! }
//! ```

pub mod error;
pub mod observer;
pub mod scheduler;


pub use error::{FleetError, FleetResult, PlanningFailure};
pub use observer::{FleetObserver, NoopObserver};
pub use scheduler::{schedule_fleet, FleetScheduler};
