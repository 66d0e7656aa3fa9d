//! Unit tests for fl-plan.
//!
//! Graphs are hand-built so every expected tick can be worked out by hand.

#[cfg(test)]
mod helpers {
    use fl_core::{HubRole, ZoneKind};
    use fl_graph::{HubGraph, HubGraphBuilder};

    /// `s ── m ── e`, all Normal, `m` holds one drone, links carry one.
    pub fn line() -> HubGraph {
        let mut b = HubGraphBuilder::new("line");
        b.add_hub("s", 1, 1, HubRole::Start, ZoneKind::Normal, 2).unwrap();
        b.add_hub("m", 2, 1, HubRole::Normal, ZoneKind::Normal, 1).unwrap();
        b.add_hub("e", 3, 1, HubRole::End, ZoneKind::Normal, 1).unwrap();
        b.add_link("s", "m", 1).unwrap();
        b.add_link("m", "e", 1).unwrap();
        b.set_drone_count(2);
        b.build().unwrap()
    }

    /// `s ── r ── e` with `r` Restricted.
    pub fn restricted_line() -> HubGraph {
        let mut b = HubGraphBuilder::new("restricted");
        b.add_hub("s", 1, 1, HubRole::Start, ZoneKind::Normal, 2).unwrap();
        b.add_hub("r", 2, 1, HubRole::Normal, ZoneKind::Restricted, 1).unwrap();
        b.add_hub("e", 3, 1, HubRole::End, ZoneKind::Normal, 1).unwrap();
        b.add_link("s", "r", 1).unwrap();
        b.add_link("r", "e", 1).unwrap();
        b.set_drone_count(2);
        b.build().unwrap()
    }

    /// Two equal-length branches; the `n` (Normal) branch is linked first,
    /// the `p` branch has the given zone.
    pub fn fork(p_zone: ZoneKind) -> HubGraph {
        let mut b = HubGraphBuilder::new("fork");
        b.add_hub("s", 1, 2, HubRole::Start, ZoneKind::Normal, 3).unwrap();
        b.add_hub("n", 2, 1, HubRole::Normal, ZoneKind::Normal, 1).unwrap();
        b.add_hub("p", 2, 3, HubRole::Normal, p_zone, 1).unwrap();
        b.add_hub("e", 3, 2, HubRole::End, ZoneKind::Normal, 1).unwrap();
        b.add_link("s", "n", 1).unwrap();
        b.add_link("s", "p", 1).unwrap();
        b.add_link("n", "e", 1).unwrap();
        b.add_link("p", "e", 1).unwrap();
        b.set_drone_count(3);
        b.build().unwrap()
    }

    pub fn names(graph: &HubGraph, t: &crate::Trajectory) -> Vec<String> {
        t.waypoints.iter().map(|w| w.label(graph)).collect()
    }
}

// ── Frontier ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frontier {
    use fl_core::{HubId, Tick};

    use crate::Frontier;

    #[test]
    fn pops_by_tick_then_weight_then_insertion() {
        let mut f = Frontier::new();
        f.push(Tick(2), 1_000, HubId(0));
        f.push(Tick(1), 2_000, HubId(1));
        f.push(Tick(1), 1_001, HubId(2));
        f.push(Tick(1), 1_001, HubId(3));
        f.push(Tick(1), 1_000, HubId(4));

        let order: Vec<u32> = std::iter::from_fn(|| f.pop()).map(|e| e.hub.0).collect();
        assert_eq!(order, [4, 2, 3, 1, 0]);
    }

    #[test]
    fn counts_pushes() {
        let mut f = Frontier::new();
        assert!(f.is_empty());
        f.push(Tick(0), 1, HubId(0));
        f.push(Tick(0), 1, HubId(0));
        assert_eq!(f.len(), 2);
        f.pop();
        assert_eq!(f.len(), 1);
        assert_eq!(f.pushed(), 2);
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use fl_core::{HubId, HubRole, Tick, ZoneKind};
    use fl_graph::HubGraphBuilder;
    use fl_ledger::CapacityLedger;

    use crate::planner::first_free_slot;
    use crate::{PlanError, Planner, TimeExpandedPlanner};

    #[test]
    fn empty_ledger_gives_hop_count_arrival() {
        let g = super::helpers::line();
        let tree = TimeExpandedPlanner.plan(&g, &CapacityLedger::new()).unwrap();
        assert_eq!(tree.end_arrival(), Some(Tick(2)));
        assert_eq!(tree.predecessor(g.end), g.hub_id("m"));
        assert_eq!(tree.predecessor(g.start), None);
    }

    #[test]
    fn restricted_entry_costs_two_ticks() {
        let g = super::helpers::restricted_line();
        let tree = TimeExpandedPlanner.plan(&g, &CapacityLedger::new()).unwrap();
        assert_eq!(tree.arrival(g.hub_id("r").unwrap()), Some(Tick(2)));
        assert_eq!(tree.end_arrival(), Some(Tick(3)));
    }

    #[test]
    fn zone_weight_breaks_equal_arrival_ties() {
        let g = super::helpers::fork(ZoneKind::Priority);
        let tree = TimeExpandedPlanner.plan(&g, &CapacityLedger::new()).unwrap();
        assert_eq!(tree.predecessor(g.end), g.hub_id("p"));
    }

    #[test]
    fn insertion_order_breaks_full_ties() {
        let g = super::helpers::fork(ZoneKind::Normal);
        let tree = TimeExpandedPlanner.plan(&g, &CapacityLedger::new()).unwrap();
        assert_eq!(tree.predecessor(g.end), g.hub_id("n"));
    }

    #[test]
    fn earlier_arrival_beats_cheaper_zone() {
        // p is Restricted: reaching e through it takes 3 ticks vs 2 via n.
        let g = super::helpers::fork(ZoneKind::Restricted);
        let tree = TimeExpandedPlanner.plan(&g, &CapacityLedger::new()).unwrap();
        assert_eq!(tree.predecessor(g.end), g.hub_id("n"));
        assert_eq!(tree.end_arrival(), Some(Tick(2)));
    }

    #[test]
    fn planning_reads_reservations() {
        let g = super::helpers::line();
        let m = g.hub_id("m").unwrap();
        let sm = g.link_between(g.start, m).unwrap();
        let mut ledger = CapacityLedger::new();
        ledger.reserve(sm, Tick(1));
        ledger.reserve(sm, Tick(2));

        let tree = TimeExpandedPlanner.plan(&g, &ledger).unwrap();
        assert_eq!(tree.arrival(m), Some(Tick(3)));
        assert_eq!(tree.end_arrival(), Some(Tick(4)));
        // Nothing was written.
        assert_eq!(ledger.reservation_count(), 2);
    }

    #[test]
    fn blocked_hubs_are_never_entered() {
        let mut b = HubGraphBuilder::new("wall");
        b.add_hub("s", 1, 1, HubRole::Start, ZoneKind::Normal, 1).unwrap();
        b.add_hub("wall", 2, 1, HubRole::Normal, ZoneKind::Blocked, 5).unwrap();
        b.add_hub("a", 2, 2, HubRole::Normal, ZoneKind::Normal, 1).unwrap();
        b.add_hub("c", 3, 2, HubRole::Normal, ZoneKind::Normal, 1).unwrap();
        b.add_hub("e", 3, 1, HubRole::End, ZoneKind::Normal, 1).unwrap();
        b.add_link("s", "wall", 1).unwrap();
        b.add_link("wall", "e", 1).unwrap();
        b.add_link("s", "a", 1).unwrap();
        b.add_link("a", "c", 1).unwrap();
        b.add_link("c", "e", 1).unwrap();
        b.set_drone_count(1);
        let g = b.build().unwrap();

        let tree = TimeExpandedPlanner.plan(&g, &CapacityLedger::new()).unwrap();
        assert_eq!(tree.end_arrival(), Some(Tick(3)));
        assert_eq!(tree.arrival(g.hub_id("wall").unwrap()), None);
    }

    #[test]
    fn blocked_end_is_unreachable() {
        let mut b = HubGraphBuilder::new("sealed");
        b.add_hub("s", 1, 1, HubRole::Start, ZoneKind::Normal, 1).unwrap();
        b.add_hub("e", 2, 1, HubRole::End, ZoneKind::Blocked, 1).unwrap();
        b.add_link("s", "e", 1).unwrap();
        b.set_drone_count(1);
        let g = b.build().unwrap();

        let err = TimeExpandedPlanner.plan(&g, &CapacityLedger::new()).unwrap_err();
        assert_eq!(err, PlanError::Unreachable { start: HubId(0), end: HubId(1) });
    }

    #[test]
    fn disconnected_end_is_unreachable() {
        let mut b = HubGraphBuilder::new("islands");
        b.add_hub("s", 1, 1, HubRole::Start, ZoneKind::Normal, 1).unwrap();
        b.add_hub("a", 2, 1, HubRole::Normal, ZoneKind::Normal, 1).unwrap();
        b.add_hub("e", 9, 9, HubRole::End, ZoneKind::Normal, 1).unwrap();
        b.add_link("s", "a", 1).unwrap();
        b.set_drone_count(1);
        let g = b.build().unwrap();

        assert!(matches!(
            TimeExpandedPlanner.plan(&g, &CapacityLedger::new()),
            Err(PlanError::Unreachable { .. })
        ));
    }

    #[test]
    fn closed_links_are_never_crossed() {
        let mut b = HubGraphBuilder::new("closed");
        b.add_hub("s", 1, 1, HubRole::Start, ZoneKind::Normal, 1).unwrap();
        b.add_hub("e", 2, 1, HubRole::End, ZoneKind::Normal, 1).unwrap();
        b.add_link("s", "e", 0).unwrap();
        b.set_drone_count(1);
        let g = b.build().unwrap();

        assert!(TimeExpandedPlanner.plan(&g, &CapacityLedger::new()).is_err());
    }

    #[test]
    fn slot_search_stops_past_horizon() {
        let g = super::helpers::restricted_line();
        let r = g.hub(g.hub_id("r").unwrap());
        let link = g.link(g.link_between(g.start, r.id).unwrap());

        let mut ledger = CapacityLedger::new();
        for t in 2..=6 {
            ledger.reserve(link.id, Tick(t));
        }
        // Restricted entry needs the link free at t-1 and t: first is 8.
        assert_eq!(first_free_slot(&ledger, link, r, Tick(2)), Some(Tick(8)));

        ledger.reserve(r.id, Tick(8));
        assert_eq!(first_free_slot(&ledger, link, r, Tick(2)), Some(Tick(9)));
    }

    #[test]
    fn end_hub_capacity_is_not_enforced_in_slot_search() {
        let g = super::helpers::line();
        let m = g.hub_id("m").unwrap();
        let link = g.link(g.link_between(m, g.end).unwrap());
        let mut ledger = CapacityLedger::new();
        ledger.reserve(g.end, Tick(2));
        ledger.reserve(g.end, Tick(2));
        assert_eq!(first_free_slot(&ledger, link, g.end_hub(), Tick(2)), Some(Tick(2)));
    }
}

// ── Reconstruction ────────────────────────────────────────────────────────────

#[cfg(test)]
mod reconstruct {
    use fl_core::{DroneId, Tick};
    use fl_ledger::CapacityLedger;

    use super::helpers::names;
    use crate::{reconstruct, Planner, SearchTree, TimeExpandedPlanner, Waypoint};

    fn route(
        g: &fl_graph::HubGraph,
        ledger: &mut CapacityLedger,
        drone: u32,
    ) -> crate::Trajectory {
        let tree = TimeExpandedPlanner.plan(g, ledger).unwrap();
        reconstruct(g, &tree, ledger, DroneId(drone)).unwrap()
    }

    #[test]
    fn second_drone_waits_for_the_link() {
        let g = super::helpers::line();
        let mut ledger = CapacityLedger::new();

        let d1 = route(&g, &mut ledger, 1);
        assert_eq!(names(&g, &d1), ["s", "m", "e"]);

        let d2 = route(&g, &mut ledger, 2);
        assert_eq!(names(&g, &d2), ["s", "s", "m", "e"]);
        assert_eq!(d2.arrival_tick(), Tick(3));
        assert_eq!(d2.wait_ticks(), 1);
    }

    #[test]
    fn reservations_cover_every_tick_after_zero() {
        let g = super::helpers::line();
        let m = g.hub_id("m").unwrap();
        let sm = g.link_between(g.start, m).unwrap();
        let me = g.link_between(m, g.end).unwrap();
        let mut ledger = CapacityLedger::new();
        route(&g, &mut ledger, 1);
        route(&g, &mut ledger, 2);

        assert_eq!(ledger.occupancy(g.start, Tick(0)), 0);
        assert_eq!(ledger.occupancy(g.start, Tick(1)), 1);
        assert_eq!(ledger.occupancy(m, Tick(1)), 1);
        assert_eq!(ledger.occupancy(m, Tick(2)), 1);
        assert_eq!(ledger.occupancy(sm, Tick(1)), 1);
        assert_eq!(ledger.occupancy(sm, Tick(2)), 1);
        assert_eq!(ledger.occupancy(me, Tick(2)), 1);
        assert_eq!(ledger.occupancy(me, Tick(3)), 1);
        assert_eq!(ledger.occupancy(g.end, Tick(2)), 1);
        assert_eq!(ledger.occupancy(g.end, Tick(3)), 1);
        // Drone 1: 2 hubs + 2 links.  Drone 2: 2 hubs + 2 links + 1 wait.
        assert_eq!(ledger.reservation_count(), 9);
    }

    #[test]
    fn restricted_entry_emits_transit_and_holds_link_two_ticks() {
        let g = super::helpers::restricted_line();
        let r = g.hub_id("r").unwrap();
        let sr = g.link_between(g.start, r).unwrap();
        let mut ledger = CapacityLedger::new();

        let d1 = route(&g, &mut ledger, 1);
        assert_eq!(names(&g, &d1), ["s", "s-r", "r", "e"]);
        assert_eq!(d1.at(Tick(1)), Some(Waypoint::Transit { from: g.start, to: r }));
        assert_eq!(ledger.occupancy(sr, Tick(1)), 1);
        assert_eq!(ledger.occupancy(sr, Tick(2)), 1);
        assert_eq!(ledger.occupancy(r, Tick(1)), 0);
        assert_eq!(ledger.occupancy(r, Tick(2)), 1);
    }

    #[test]
    fn restricted_follower_waits_for_both_link_ticks() {
        let g = super::helpers::restricted_line();
        let mut ledger = CapacityLedger::new();
        route(&g, &mut ledger, 1);
        let d2 = route(&g, &mut ledger, 2);
        assert_eq!(names(&g, &d2), ["s", "s", "s", "s-r", "r", "e"]);
        assert_eq!(d2.arrival_tick(), Tick(5));
    }

    #[test]
    fn end_hub_stacks_beyond_capacity() {
        let g = super::helpers::fork(fl_core::ZoneKind::Normal);
        let mut ledger = CapacityLedger::new();
        let d1 = route(&g, &mut ledger, 1);
        let d2 = route(&g, &mut ledger, 2);
        assert_eq!(names(&g, &d1), ["s", "n", "e"]);
        assert_eq!(names(&g, &d2), ["s", "p", "e"]);
        assert_eq!(ledger.occupancy(g.end, Tick(2)), 2);
        assert_eq!(g.end_hub().capacity, 1);
    }

    #[test]
    fn broken_tree_is_an_error_not_a_panic() {
        let g = super::helpers::line();
        let tree = SearchTree {
            start:    g.start,
            end:      g.end,
            arrival:  vec![Some(Tick(0)), None, Some(Tick(2))],
            pred:     vec![fl_core::HubId::INVALID; 3],
            expanded: 1,
        };
        let mut ledger = CapacityLedger::new();
        assert!(reconstruct(&g, &tree, &mut ledger, DroneId(1)).is_err());
    }
}

// ── Trajectory helpers ────────────────────────────────────────────────────────

#[cfg(test)]
mod trajectory {
    use fl_core::{DroneId, HubId, Tick};

    use crate::{Trajectory, Waypoint};

    fn sample() -> Trajectory {
        Trajectory::new(
            DroneId(2),
            vec![
                Waypoint::At(HubId(0)),
                Waypoint::At(HubId(0)),
                Waypoint::Transit { from: HubId(0), to: HubId(1) },
                Waypoint::At(HubId(1)),
                Waypoint::At(HubId(2)),
            ],
        )
    }

    #[test]
    fn arrival_and_lookup() {
        let t = sample();
        assert_eq!(t.arrival_tick(), Tick(4));
        assert_eq!(t.at(Tick(3)), Some(Waypoint::At(HubId(1))));
        assert_eq!(t.at(Tick(9)), None);
        assert_eq!(t.at(Tick(2)).and_then(Waypoint::hub), None);
    }

    #[test]
    fn moves_and_waits() {
        let t = sample();
        assert!(!t.moves_at(Tick(0)));
        assert!(!t.moves_at(Tick(1)));
        assert!(t.moves_at(Tick(2)));
        assert!(t.moves_at(Tick(4)));
        assert!(!t.moves_at(Tick(5)));
        assert_eq!(t.wait_ticks(), 1);
    }

    #[test]
    fn visits_includes_transit_endpoints() {
        let t = sample();
        assert!(t.visits(HubId(1)));
        assert!(!t.visits(HubId(7)));
    }

    #[test]
    fn display_uses_hub_names() {
        let g = super::helpers::restricted_line();
        let t = Trajectory::new(
            DroneId(1),
            vec![
                Waypoint::At(g.start),
                Waypoint::Transit { from: g.start, to: HubId(1) },
                Waypoint::At(HubId(1)),
                Waypoint::At(g.end),
            ],
        );
        assert_eq!(t.display(&g).to_string(), "D1: s(0) s-r(1) r(2) e(3)");
    }
}
