//! `fl-graph` — hub/link topology and its validating builder.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`graph`]   | `Hub`, `Link`, `Bounds`, `HubGraph` (CSR adjacency)   |
//! | [`builder`] | `HubGraphBuilder` — `add_hub`, `add_link`, `build`    |
//!
//! The graph holds no time-dependent state.  Per-tick occupancy lives in
//! `fl-ledger`, keyed by the `HubId`/`LinkId`s handed out here.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on hubs and links.   |

pub mod builder;
pub mod graph;


pub use builder::HubGraphBuilder;
pub use graph::{Bounds, Hub, HubGraph, Link};
