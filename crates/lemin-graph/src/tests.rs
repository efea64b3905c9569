//! Unit tests for lemin-graph.
//!
//! All tests use hand-crafted farms so they run without any input file.

#[cfg(test)]
mod helpers {
    use crate::{Coord, Farm, FarmBuilder};

    /// Build a farm from room names and `a-b` link pairs.  The first room is
    /// the source and the last the sink.
    pub fn farm(rooms: &[&str], links: &[(&str, &str)], ants: u32) -> Farm {
        let mut b = FarmBuilder::new();
        for (i, name) in rooms.iter().enumerate() {
            b.add_room(*name, Coord::new(i as i64, 0)).unwrap();
        }
        for (a, c) in links {
            b.add_link(a, c).unwrap();
        }
        b.build(rooms[0], rooms[rooms.len() - 1], ants).unwrap()
    }

    /// Two independent two-hop routes: S-A-E and S-B-E.
    pub fn diamond() -> Farm {
        farm(&["S", "A", "B", "E"], &[("S", "A"), ("A", "E"), ("S", "B"), ("B", "E")], 2)
    }

    /// Both searches return a single path although two disjoint ones exist:
    /// S-A-D-E and S-C-B-E.
    pub fn greedy_trap() -> Farm {
        farm(
            &["S", "A", "B", "C", "D", "E"],
            &[("S", "A"), ("S", "C"), ("A", "B"), ("A", "D"), ("C", "B"), ("B", "E"), ("D", "E")],
            4,
        )
    }

    /// Depth-first picks S-A-B-E and blocks everything else; breadth-first
    /// finds S-A-E and S-B-E.
    pub fn long_first() -> Farm {
        farm(
            &["S", "A", "B", "E"],
            &[("S", "A"), ("A", "B"), ("B", "E"), ("A", "E"), ("S", "B")],
            4,
        )
    }

    /// Room names along each path, for readable assertions.
    pub fn names(farm: &Farm, paths: &crate::PathSet) -> Vec<Vec<String>> {
        paths
            .iter()
            .map(|p| p.rooms().iter().map(|&r| farm.room_name(r).to_owned()).collect())
            .collect()
    }

    pub fn route(rooms: &[&str]) -> Vec<String> {
        rooms.iter().map(|r| r.to_string()).collect()
    }
}

// ── Builder & farm structure ──────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use lemin_core::{NeighborOrder, RoomId};

    use crate::{Coord, FarmBuilder, GraphError};

    #[test]
    fn rooms_get_sequential_ids() {
        let mut b = FarmBuilder::new();
        assert_eq!(b.add_room("a", Coord::new(0, 0)).unwrap(), RoomId(0));
        assert_eq!(b.add_room("b", Coord::new(1, 1)).unwrap(), RoomId(1));
        assert_eq!(b.room_count(), 2);
    }

    #[test]
    fn duplicate_room_rejected() {
        let mut b = FarmBuilder::new();
        b.add_room("a", Coord::default()).unwrap();
        assert_eq!(
            b.add_room("a", Coord::new(5, 5)),
            Err(GraphError::DuplicateRoom("a".into()))
        );
    }

    #[test]
    fn link_errors() {
        let mut b = FarmBuilder::new();
        b.add_room("a", Coord::default()).unwrap();
        assert_eq!(b.add_link("a", "zz"), Err(GraphError::UnknownRoom("zz".into())));
        assert_eq!(b.add_link("a", "a"), Err(GraphError::SelfLink("a".into())));
    }

    #[test]
    fn links_are_symmetric_and_deduplicated() {
        let farm = super::helpers::farm(&["s", "m", "e"], &[("s", "m"), ("m", "s"), ("m", "e")], 1);
        let s = farm.room_id("s").unwrap();
        let m = farm.room_id("m").unwrap();
        assert_eq!(farm.link_count(), 2);
        assert!(farm.are_linked(s, m));
        assert!(farm.are_linked(m, s));
        assert_eq!(farm.degree(m), 2);
    }

    #[test]
    fn build_errors() {
        let mk = || {
            let mut b = FarmBuilder::new();
            b.add_room("s", Coord::default()).unwrap();
            b.add_room("e", Coord::default()).unwrap();
            b
        };
        assert_eq!(mk().build("s", "s", 1).unwrap_err(), GraphError::SameStartEnd("s".into()));
        assert_eq!(mk().build("s", "x", 1).unwrap_err(), GraphError::UnknownRoom("x".into()));
        assert_eq!(mk().build("s", "e", 0).unwrap_err(), GraphError::NoAnts);
        assert!(mk().build("s", "e", 1).is_ok());
    }

    #[test]
    fn neighbor_orders() {
        let farm = super::helpers::farm(
            &["s", "zeta", "alpha", "mid", "e"],
            &[("s", "zeta"), ("s", "mid"), ("s", "alpha"), ("alpha", "e")],
            1,
        );
        let s = farm.start;
        let declared: Vec<&str> = farm
            .neighbors(s, NeighborOrder::Declared)
            .iter()
            .map(|&r| farm.room_name(r))
            .collect();
        let lex: Vec<&str> = farm
            .neighbors(s, NeighborOrder::Lexicographic)
            .iter()
            .map(|&r| farm.room_name(r))
            .collect();
        assert_eq!(declared, ["zeta", "mid", "alpha"]);
        assert_eq!(lex, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn lookups() {
        let farm = super::helpers::diamond();
        assert_eq!(farm.start_name(), "S");
        assert_eq!(farm.end_name(), "E");
        assert_eq!(farm.ants, 2);
        assert_eq!(farm.coord(farm.room_id("B").unwrap()), Coord::new(2, 0));
        assert!(farm.is_terminal(farm.start));
        assert!(!farm.is_terminal(farm.room_id("A").unwrap()));
        assert_eq!(farm.room_id("nope"), None);
    }
}

// ── Path & PathSet ────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use lemin_core::RoomId;

    use crate::{GraphError, Path, PathSet};

    fn p(ids: &[u32]) -> Path {
        Path::new(ids.iter().map(|&i| RoomId(i)).collect()).unwrap()
    }

    #[test]
    fn degenerate_paths_rejected() {
        assert_eq!(Path::new(vec![]), Err(GraphError::DegeneratePath(0)));
        assert_eq!(Path::new(vec![RoomId(0)]), Err(GraphError::DegeneratePath(1)));
    }

    #[test]
    fn repeated_room_rejected() {
        let ids = vec![RoomId(0), RoomId(1), RoomId(0), RoomId(3)];
        assert_eq!(Path::new(ids), Err(GraphError::RepeatedRoom(RoomId(0))));
    }

    #[test]
    fn accessors() {
        let path = p(&[0, 4, 5, 9]);
        assert_eq!(path.len(), 4);
        assert_eq!(path.edge_count(), 3);
        assert_eq!(path.first(), RoomId(0));
        assert_eq!(path.last(), RoomId(9));
        assert_eq!(path.room(1), RoomId(4));
        assert_eq!(path.intermediates(), &[RoomId(4), RoomId(5)]);
        assert!(p(&[0, 9]).intermediates().is_empty());
    }

    #[test]
    fn shared_intermediate_rejected() {
        let err = PathSet::new(RoomId(0), RoomId(9), vec![p(&[0, 1, 9]), p(&[0, 2, 9]), p(&[0, 2, 3, 9])])
            .unwrap_err();
        assert_eq!(err, GraphError::SharedRoom { room: RoomId(2), first: 1, second: 2 });
    }

    #[test]
    fn disjointness_checked_at_sparse_indices() {
        // Highest room index sits on the last path only.
        let ok = PathSet::new(RoomId(0), RoomId(1), vec![p(&[0, 7, 1]), p(&[0, 5000, 1])]);
        assert!(ok.is_ok());

        let err = PathSet::new(RoomId(0), RoomId(1), vec![p(&[0, 5000, 1]), p(&[0, 3, 5000, 1])])
            .unwrap_err();
        assert_eq!(err, GraphError::SharedRoom { room: RoomId(5000), first: 0, second: 1 });
    }

    #[test]
    fn endpoint_mismatch_rejected() {
        let err = PathSet::new(RoomId(0), RoomId(9), vec![p(&[0, 1, 9]), p(&[1, 9])]).unwrap_err();
        assert_eq!(err, GraphError::EndpointMismatch { index: 1 });
    }

    #[test]
    fn terminals_may_be_shared() {
        let set = PathSet::new(RoomId(0), RoomId(9), vec![p(&[0, 9]), p(&[0, 1, 9])]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.lengths(), vec![2, 3]);
        assert!(PathSet::new(RoomId(0), RoomId(9), vec![]).unwrap().is_empty());
    }
}

// ── Strategy A ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dfs {
    use lemin_core::NeighborOrder;

    use super::helpers::{diamond, farm, greedy_trap, long_first, names, route};
    use crate::{DfsPathFinder, GraphError, PathFinder, enumerate_simple_paths};

    #[test]
    fn diamond_yields_both_routes() {
        let f = diamond();
        let paths = DfsPathFinder::default().find_paths(&f).unwrap();
        assert_eq!(names(&f, &paths), vec![route(&["S", "A", "E"]), route(&["S", "B", "E"])]);
    }

    #[test]
    fn enumeration_follows_declared_order() {
        let f = long_first();
        let all = enumerate_simple_paths(&f, NeighborOrder::Declared, None);
        let all: Vec<String> = all.iter().map(|p| p.describe(&f)).collect();
        assert_eq!(all, ["S->A->B->E", "S->A->E", "S->B->A->E", "S->B->E"]);
    }

    #[test]
    fn enumeration_limit_caps_output() {
        let f = long_first();
        assert_eq!(enumerate_simple_paths(&f, NeighborOrder::Declared, Some(2)).len(), 2);
    }

    #[test]
    fn first_fit_keeps_earliest_path() {
        let f = long_first();
        let paths = DfsPathFinder::default().find_paths(&f).unwrap();
        assert_eq!(names(&f, &paths), vec![route(&["S", "A", "B", "E"])]);
    }

    #[test]
    fn first_fit_is_not_maximum() {
        let f = greedy_trap();
        let paths = DfsPathFinder::default().find_paths(&f).unwrap();
        assert_eq!(names(&f, &paths), vec![route(&["S", "A", "B", "E"])]);
    }

    #[test]
    fn lexicographic_order_changes_discovery() {
        // Declared order tries the long route through "z" first.
        let f = farm(
            &["s", "z", "a", "e"],
            &[("s", "z"), ("z", "a"), ("a", "e"), ("s", "a"), ("z", "e")],
            1,
        );
        let declared = DfsPathFinder::new(NeighborOrder::Declared).find_paths(&f).unwrap();
        let lex      = DfsPathFinder::new(NeighborOrder::Lexicographic).find_paths(&f).unwrap();
        assert_eq!(names(&f, &declared), vec![route(&["s", "z", "a", "e"])]);
        assert_eq!(names(&f, &lex), vec![route(&["s", "a", "e"]), route(&["s", "z", "e"])]);
    }

    #[test]
    fn direct_link_is_one_path() {
        let f = farm(&["S", "E"], &[("S", "E")], 5);
        let paths = DfsPathFinder::default().find_paths(&f).unwrap();
        assert_eq!(names(&f, &paths), vec![route(&["S", "E"])]);
    }

    #[test]
    fn disconnected_is_no_route() {
        let f = farm(&["S", "X", "E"], &[("S", "X")], 1);
        assert_eq!(
            DfsPathFinder::default().find_paths(&f),
            Err(GraphError::NoRoute { start: "S".into(), end: "E".into() })
        );
    }

    #[test]
    fn repeated_runs_are_identical() {
        let f = greedy_trap();
        let finder = DfsPathFinder::new(NeighborOrder::Lexicographic);
        assert_eq!(finder.find_paths(&f).unwrap(), finder.find_paths(&f).unwrap());
    }
}

// ── Strategy B ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bfs {
    use super::helpers::{diamond, farm, greedy_trap, long_first, names, route};
    use crate::{BfsPathFinder, GraphError, PathFinder};

    #[test]
    fn diamond_yields_both_routes() {
        let f = diamond();
        let paths = BfsPathFinder::default().find_paths(&f).unwrap();
        assert_eq!(names(&f, &paths), vec![route(&["S", "A", "E"]), route(&["S", "B", "E"])]);
    }

    #[test]
    fn shortest_first_beats_first_fit() {
        let f = long_first();
        let paths = BfsPathFinder::default().find_paths(&f).unwrap();
        assert_eq!(names(&f, &paths), vec![route(&["S", "A", "E"]), route(&["S", "B", "E"])]);
    }

    #[test]
    fn retired_rooms_are_never_returned() {
        // Max flow is 2 here, but the first shortest path takes A and B.
        let f = greedy_trap();
        let paths = BfsPathFinder::default().find_paths(&f).unwrap();
        assert_eq!(names(&f, &paths), vec![route(&["S", "A", "B", "E"])]);
    }

    #[test]
    fn direct_link_used_once() {
        let f = farm(&["S", "A", "E"], &[("S", "E"), ("S", "A"), ("A", "E")], 3);
        let paths = BfsPathFinder::default().find_paths(&f).unwrap();
        assert_eq!(names(&f, &paths), vec![route(&["S", "E"]), route(&["S", "A", "E"])]);
    }

    #[test]
    fn disconnected_is_no_route() {
        let f = farm(&["S", "X", "E"], &[("S", "X")], 1);
        assert!(matches!(
            BfsPathFinder::default().find_paths(&f),
            Err(GraphError::NoRoute { .. })
        ));
    }
}

// ── finders_for ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod finder {
    use lemin_core::{RunConfig, Strategy};

    use crate::finders_for;

    #[test]
    fn strategy_selects_finders() {
        let names = |strategy| {
            let cfg = RunConfig { strategy, ..RunConfig::default() };
            finders_for(&cfg).iter().map(|f| f.name()).collect::<Vec<_>>()
        };
        assert_eq!(names(Strategy::Dfs), ["dfs"]);
        assert_eq!(names(Strategy::Bfs), ["bfs"]);
        assert_eq!(names(Strategy::Best), ["dfs", "bfs"]);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use lemin_core::NeighborOrder;
    use proptest::prelude::*;

    use crate::{
        BfsPathFinder, Coord, DfsPathFinder, Farm, FarmBuilder, GraphError, PathFinder, PathSet,
        enumerate_simple_paths,
    };

    /// Random farm: `n` rooms named `r0..`, source `r0`, sink `r{n-1}`.
    fn arb_farm() -> impl Strategy<Value = Farm> {
        (2usize..9)
            .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..20)))
            .prop_map(|(n, links)| {
                let mut b = FarmBuilder::new();
                for i in 0..n {
                    b.add_room(format!("r{i}"), Coord::new(i as i64, 0)).unwrap();
                }
                for (a, c) in links {
                    if a != c {
                        b.add_link(&format!("r{a}"), &format!("r{c}")).unwrap();
                    }
                }
                b.build("r0", &format!("r{}", n - 1), 3).unwrap()
            })
    }

    fn check_path_set(farm: &Farm, set: &PathSet) {
        assert!(!set.is_empty());
        set.check_disjoint().unwrap();
        for path in set {
            assert_eq!(path.first(), farm.start);
            assert_eq!(path.last(), farm.end);
            for hop in path.rooms().windows(2) {
                assert!(farm.are_linked(hop[0], hop[1]));
            }
        }
    }

    proptest! {
        #[test]
        fn both_strategies_return_disjoint_paths(farm in arb_farm()) {
            let reachable = !enumerate_simple_paths(&farm, NeighborOrder::Declared, Some(1)).is_empty();
            for finder in [
                &DfsPathFinder::default() as &dyn PathFinder,
                &BfsPathFinder::default(),
            ] {
                match finder.find_paths(&farm) {
                    Ok(set) => {
                        prop_assert!(reachable);
                        check_path_set(&farm, &set);
                    }
                    Err(GraphError::NoRoute { .. }) => prop_assert!(!reachable),
                    Err(e) => prop_assert!(false, "unexpected error {e}"),
                }
            }
        }

        #[test]
        fn dfs_is_deterministic(farm in arb_farm()) {
            let finder = DfsPathFinder::new(NeighborOrder::Lexicographic);
            prop_assert_eq!(finder.find_paths(&farm), finder.find_paths(&farm));
        }

        #[test]
        fn enumerated_paths_are_simple_and_distinct(farm in arb_farm()) {
            let all = enumerate_simple_paths(&farm, NeighborOrder::Declared, None);
            for (i, path) in all.iter().enumerate() {
                prop_assert_eq!(path.first(), farm.start);
                prop_assert_eq!(path.last(), farm.end);
                prop_assert!(!all[..i].contains(path));
            }
        }
    }
}
