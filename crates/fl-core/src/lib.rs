//! `fl-core` — foundational types for the fly-in fleet router.
//!
//! Every other `fl-*` crate depends on this one.  It has no `fl-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module      | Contents                                           |
//! |-------------|----------------------------------------------------|
//! | [`ids`]     | `HubId`, `LinkId`, `DroneId`                       |
//! | [`time`]    | `Tick`                                             |
//! | [`zone`]    | `ZoneKind`, `HubRole`                              |
//! | [`error`]   | `ConfigError`, `ConfigResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod error;
pub mod ids;
pub mod time;
pub mod zone;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ConfigError, ConfigResult};
pub use ids::{DroneId, HubId, LinkId};
pub use time::Tick;
pub use zone::{HubRole, ZoneKind};
