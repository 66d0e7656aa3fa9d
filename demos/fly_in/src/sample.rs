//! Built-in map used when no map file is given.
//!
//! Two routes lead to `goal`: the wide Priority route through `plaza` and
//! `roof`, and a narrow Restricted shortcut through `alley`.  `tower` is
//! Blocked and never entered.

pub const SAMPLE_MAP: &str = "\
# fly_in sample map
nb_drones: 4

start_hub: base 1 1 [color=green max_drones=4]
hub: plaza 3 1 [zone=priority color=blue max_drones=2]
hub: roof 5 1 [max_drones=2]
hub: alley 3 3 [zone=restricted color=red]
hub: tower 5 3 [zone=blocked color=black]
end_hub: goal 7 2 [color=yellow max_drones=4]

connection: base-plaza [max_link_capacity=2]
connection: plaza-roof [max_link_capacity=2]
connection: roof-goal [max_link_capacity=2]
connection: base-alley
connection: alley-tower
connection: alley-goal
";
