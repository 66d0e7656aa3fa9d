//! Per-turn move listing.

use std::fmt;

use fl_core::Tick;
use fl_graph::HubGraph;
use fl_plan::Trajectory;

/// The classic text rendering of a schedule.
///
/// ```text
/// D1-a D2-s-r
/// D1-e D2-r
/// D2-e
/// 2 drones arrived in 3 turns.
/// ```
///
/// Turn `t` lists, in drone order, every drone whose waypoint at `t` differs
/// from its waypoint at `t - 1`.  A turn is printed while any drone is still
/// en route, even if nobody moves during it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnLog {
    lines:  Vec<String>,
    drones: usize,
}

impl TurnLog {
    pub fn new(graph: &HubGraph, trajectories: &[Trajectory]) -> Self {
        let turns = trajectories
            .iter()
            .map(|t| t.arrival_tick().0)
            .max()
            .unwrap_or(0);

        let lines = (1..=turns)
            .map(|t| {
                let tick = Tick(t);
                trajectories
                    .iter()
                    .filter(|traj| traj.moves_at(tick))
                    .filter_map(|traj| {
                        traj.at(tick)
                            .map(|w| format!("{}-{}", traj.drone.label(), w.label(graph)))
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();

        Self { lines, drones: trajectories.len() }
    }

    /// One entry per turn, starting at turn 1.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn turns(&self) -> usize {
        self.lines.len()
    }

    pub fn summary(&self) -> String {
        format!("{} drones arrived in {} turns.", self.drones, self.turns())
    }
}

impl fmt::Display for TurnLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        write!(f, "{}", self.summary())
    }
}
