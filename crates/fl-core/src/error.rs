//! Construction-time error type.
//!
//! Every `ConfigError` is fatal to the run: the graph is rejected before any
//! scheduling happens.  Planning failures live in `fl-fleet` so callers can
//! tell "bad input" apart from "fleet partially routed".

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("hub name must not be empty")]
    EmptyHubName,

    #[error("invalid hub name {0:?}: names may not contain '-' or whitespace")]
    InvalidHubName(String),

    #[error("duplicate hub name {0:?}")]
    DuplicateHub(String),

    #[error("more than one start hub ({existing:?} and {duplicate:?})")]
    DuplicateStart { existing: String, duplicate: String },

    #[error("more than one end hub ({existing:?} and {duplicate:?})")]
    DuplicateEnd { existing: String, duplicate: String },

    #[error("hub {name:?} has capacity {capacity}; non-blocked hubs need at least 1")]
    InvalidHubCapacity { name: String, capacity: u32 },

    #[error("cannot create link: hub {0:?} not found")]
    UnknownHub(String),

    #[error("duplicate link between {0:?} and {1:?}")]
    DuplicateLink(String, String),

    #[error("link endpoints must be distinct hubs (got {0:?} twice)")]
    SelfLink(String),

    #[error("start hub (start_hub) not found")]
    MissingStart,

    #[error("end hub (end_hub) not found")]
    MissingEnd,

    #[error("drone count must be a positive integer (got {0})")]
    InvalidDroneCount(i64),

    #[error("unknown zone kind {0:?}")]
    UnknownZone(String),

    #[error("unknown hub role {0:?}")]
    UnknownRole(String),
}

/// Shorthand result type for graph construction.
pub type ConfigResult<T> = Result<T, ConfigError>;
