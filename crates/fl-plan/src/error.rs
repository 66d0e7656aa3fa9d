//! Planning error type.

use thiserror::Error;

use fl_core::HubId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The frontier ran dry before the End hub was finalized.
    #[error("end hub {end} is unreachable from start hub {start}")]
    Unreachable { start: HubId, end: HubId },

    /// The search tree does not lead back to the Start hub from `hub`.
    #[error("search tree has no consistent predecessor for {hub}")]
    BrokenChain { hub: HubId },
}

pub type PlanResult<T> = Result<T, PlanError>;
