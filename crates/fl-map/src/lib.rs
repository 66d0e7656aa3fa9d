//! `fl-map` — load a [`HubGraph`](fl_graph::HubGraph) from a map file.
//!
//! # Format
//!
//! ```text
//! # comment
//! nb_drones: 3
//! start_hub: base 1 1 [color=green max_drones=3]
//! hub: roof1 3 4 [zone=restricted color=red]
//! end_hub: goal 5 1
//! connection: base-roof1 [max_link_capacity=2]
//! connection: roof1-goal
//! ```
//!
//! Lines are trimmed.  Blank lines and `#` comments are skipped, unknown
//! `key: value` lines are ignored, anything else is an error that carries
//! its 1-based line number.

pub mod error;
pub mod loader;


pub use error::{MapError, MapResult};
pub use loader::{load_map_file, load_map_reader, load_map_str};
