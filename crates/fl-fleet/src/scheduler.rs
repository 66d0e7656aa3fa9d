//! The `FleetScheduler` and the `schedule_fleet` entry point.

use tracing::{debug, info, warn};

use fl_core::DroneId;
use fl_graph::HubGraph;
use fl_ledger::CapacityLedger;
use fl_plan::{reconstruct, Planner, TimeExpandedPlanner, Trajectory};

use crate::{FleetError, FleetObserver, FleetResult, PlanningFailure};

/// Route every drone of `graph` with the default planner.
///
/// Returns one trajectory per drone, in drone order, or the first failure
/// together with the trajectories committed before it.
pub fn schedule_fleet(graph: &HubGraph) -> Result<Vec<Trajectory>, PlanningFailure> {
    let mut scheduler = FleetScheduler::new(graph, TimeExpandedPlanner);
    match scheduler.run(&mut crate::NoopObserver) {
        Ok(()) => Ok(scheduler.into_trajectories()),
        Err(FleetError::Plan { drone, source }) => Err(PlanningFailure {
            drone,
            cause: source,
            completed: scheduler.into_trajectories(),
        }),
        // `run` never reports exhaustion.
        Err(FleetError::Exhausted) => Ok(scheduler.into_trajectories()),
    }
}

/// Owns the ledger and the growing list of trajectories for one run.
///
/// The graph is borrowed read-only; the ledger is threaded explicitly into
/// the planner (`&`) and the reconstructor (`&mut`).
pub struct FleetScheduler<'g, P: Planner> {
    graph:        &'g HubGraph,
    planner:      P,
    ledger:       CapacityLedger,
    trajectories: Vec<Trajectory>,
    next:         DroneId,
    halted:       bool,
}

impl<'g, P: Planner> FleetScheduler<'g, P> {
    pub fn new(graph: &'g HubGraph, planner: P) -> Self {
        Self {
            graph,
            planner,
            ledger:       CapacityLedger::with_resources(graph.hub_count(), graph.link_count()),
            trajectories: Vec::with_capacity(graph.drone_count as usize),
            next:         DroneId(1),
            halted:       false,
        }
    }

    /// Schedule the next drone in index order.
    ///
    /// On a planning failure the scheduler halts: this and every later call
    /// return an error and the ledger is left untouched.
    pub fn schedule_next(&mut self) -> FleetResult<&Trajectory> {
        if self.halted || self.is_complete() {
            return Err(FleetError::Exhausted);
        }
        let drone = self.next;

        let routed = self
            .planner
            .plan(self.graph, &self.ledger)
            .and_then(|tree| reconstruct(self.graph, &tree, &mut self.ledger, drone));

        match routed {
            Ok(trajectory) => {
                debug!(drone = drone.0, arrival = trajectory.arrival_tick().0, "drone scheduled");
                self.next = DroneId(drone.0 + 1);
                self.trajectories.push(trajectory);
                Ok(&self.trajectories[self.trajectories.len() - 1])
            }
            Err(source) => {
                warn!(drone = drone.0, error = %source, "drone cannot be routed; halting");
                self.halted = true;
                Err(FleetError::Plan { drone, source })
            }
        }
    }

    /// Schedule every remaining drone, reporting to `observer`.
    ///
    /// Stops at the first unreachable drone and returns its error after
    /// `on_fleet_end` has been called.
    pub fn run<O: FleetObserver>(&mut self, observer: &mut O) -> FleetResult<()> {
        let mut outcome = Ok(());
        while !self.halted && !self.is_complete() {
            match self.schedule_next() {
                Ok(trajectory) => observer.on_drone_scheduled(trajectory),
                Err(FleetError::Plan { drone, source }) => {
                    observer.on_drone_unreachable(drone, &source);
                    outcome = Err(FleetError::Plan { drone, source });
                }
                Err(FleetError::Exhausted) => break,
            }
        }

        info!(
            routed = self.trajectories.len(),
            requested = self.graph.drone_count,
            makespan = self.makespan(),
            "fleet scheduling finished"
        );
        observer.on_fleet_end(self.graph, &self.trajectories, &self.ledger);
        outcome
    }

    /// `true` once every requested drone has a trajectory.
    pub fn is_complete(&self) -> bool {
        self.trajectories.len() >= self.graph.drone_count as usize
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn graph(&self) -> &HubGraph {
        self.graph
    }

    pub fn ledger(&self) -> &CapacityLedger {
        &self.ledger
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// Latest arrival tick over all scheduled drones (0 if none).
    pub fn makespan(&self) -> u64 {
        self.trajectories
            .iter()
            .map(|t| t.arrival_tick().0)
            .max()
            .unwrap_or(0)
    }

    pub fn into_trajectories(self) -> Vec<Trajectory> {
        self.trajectories
    }

    /// Consume the scheduler, returning the trajectories and final ledger.
    pub fn into_parts(self) -> (Vec<Trajectory>, CapacityLedger) {
        (self.trajectories, self.ledger)
    }
}
