use thiserror::Error;

use fl_core::DroneId;
use fl_plan::{PlanError, Trajectory};

/// Scheduling stopped because `drone` could not reach the End hub.
///
/// Trajectories of the drones before it stay valid and reserved; they are
/// handed back in `completed`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{drone} could not be routed ({cause}); {} drone(s) were routed before it", .completed.len())]
pub struct PlanningFailure {
    pub drone:     DroneId,
    pub cause:     PlanError,
    pub completed: Vec<Trajectory>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("planning failed for {drone}: {source}")]
    Plan { drone: DroneId, source: PlanError },

    #[error("every drone has already been scheduled")]
    Exhausted,
}

pub type FleetResult<T> = Result<T, FleetError>;
