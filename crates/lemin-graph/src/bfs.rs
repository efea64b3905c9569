//! Repeated shortest-path extraction with room retirement.
//!
//! Each round runs a breadth-first search from source to sink over rooms not
//! yet used by an earlier path, rebuilds the path from the predecessor map,
//! and retires its intermediate rooms.  Rounds stop at the first search that
//! cannot reach the sink.
//!
//! This is greedy vertex-disjoint packing, not a max-flow: a retired room is
//! never handed back, so an early short path can block two later ones.  On
//! farms with cycles it still usually beats [`DfsPathFinder`] on both path
//! count and balance.
//!
//! [`DfsPathFinder`]: crate::DfsPathFinder

use std::collections::VecDeque;

use lemin_core::{NeighborOrder, RoomId};
use tracing::debug;

use crate::finder::collect_paths;
use crate::{Farm, GraphResult, PathFinder, PathSet};

/// Strategy B: repeated BFS shortest path, retiring used rooms.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPathFinder {
    pub order: NeighborOrder,
}

impl BfsPathFinder {
    pub fn new(order: NeighborOrder) -> Self {
        Self { order }
    }
}

impl PathFinder for BfsPathFinder {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn find_paths(&self, farm: &Farm) -> GraphResult<PathSet> {
        let mut retired     = vec![false; farm.room_count()];
        let mut direct_used = false;
        let mut trails      = Vec::new();

        while let Some(trail) = shortest_path(farm, self.order, &retired, direct_used) {
            if trail.len() == 2 {
                // The source→sink link has no room to retire; block it
                // explicitly or every later round would return it again.
                direct_used = true;
            }
            for room in &trail[1..trail.len() - 1] {
                retired[room.index()] = true;
            }
            debug!(round = trails.len(), rooms = trail.len(), "bfs extracted path");
            trails.push(trail);
        }

        collect_paths(farm, trails)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// One breadth-first search from `farm.start` to `farm.end`, skipping
/// `retired` rooms (and the direct link when `skip_direct`).
fn shortest_path(
    farm:        &Farm,
    order:       NeighborOrder,
    retired:     &[bool],
    skip_direct: bool,
) -> Option<Vec<RoomId>> {
    let n = farm.room_count();
    // prev[v] = room that first reached v; RoomId::NONE for unreached rooms.
    let mut prev = vec![RoomId::NONE; n];
    let mut seen = vec![false; n];
    let mut queue = VecDeque::new();

    seen[farm.start.index()] = true;
    queue.push_back(farm.start);

    while let Some(room) = queue.pop_front() {
        if room == farm.end {
            return Some(reconstruct(&prev, farm.start, farm.end));
        }

        for &next in farm.neighbors(room, order) {
            if seen[next.index()] || retired[next.index()] {
                continue;
            }
            if skip_direct && room == farm.start && next == farm.end {
                continue;
            }
            seen[next.index()] = true;
            prev[next.index()] = room;
            queue.push_back(next);
        }
    }

    None
}

/// Walk the predecessor map back from `end` to `start`.
fn reconstruct(prev: &[RoomId], start: RoomId, end: RoomId) -> Vec<RoomId> {
    let mut rooms = vec![end];
    let mut cur = end;
    while cur != start {
        cur = prev[cur.index()];
        rooms.push(cur);
    }
    rooms.reverse();
    rooms
}
