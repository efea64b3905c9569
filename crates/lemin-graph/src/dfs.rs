//! Exhaustive simple-path enumeration with first-fit disjoint selection.
//!
//! # Algorithm
//!
//! 1. Enumerate every simple path from source to sink depth-first, visiting
//!    neighbors in the configured [`NeighborOrder`].
//! 2. Scan the paths in discovery order and accept a path when none of its
//!    intermediate rooms has been claimed by an earlier accepted path; then
//!    claim them.
//!
//! Both steps run interleaved: each path is offered to the selector as soon
//! as it is discovered, which gives exactly the result of "enumerate all,
//! then scan" without holding the full (exponential) path list in memory.
//!
//! The selection is first-fit: maximal under discovery order, not maximum.
//! Enumeration is exponential in the worst case; cap it with
//! `enumeration_limit` on dense farms.

use std::ops::ControlFlow;

use lemin_core::{NeighborOrder, RoomId};
use tracing::{debug, warn};

use crate::finder::collect_paths;
use crate::{Farm, GraphResult, Path, PathFinder, PathSet};

/// Strategy A: depth-first enumeration + first-fit disjoint selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsPathFinder {
    pub order: NeighborOrder,

    /// Stop after this many enumerated paths.  `None` = exhaustive.
    pub enumeration_limit: Option<usize>,
}

impl DfsPathFinder {
    pub fn new(order: NeighborOrder) -> Self {
        Self { order, enumeration_limit: None }
    }
}

impl PathFinder for DfsPathFinder {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn find_paths(&self, farm: &Farm) -> GraphResult<PathSet> {
        let mut claimed    = vec![false; farm.room_count()];
        let mut selected   = Vec::new();
        let mut enumerated = 0usize;
        let mut truncated  = false;

        // Every accepted path leaves the source through a distinct neighbor
        // and enters the sink through a distinct neighbor, so no more than
        // this many paths can ever be accepted.
        let ceiling = farm.degree(farm.start).min(farm.degree(farm.end));

        for_each_simple_path(farm, self.order, |trail| {
            enumerated += 1;

            let inner = &trail[1..trail.len() - 1];
            if inner.iter().all(|r| !claimed[r.index()]) {
                for r in inner {
                    claimed[r.index()] = true;
                }
                selected.push(trail.to_vec());
            }

            if selected.len() >= ceiling {
                return ControlFlow::Break(());
            }
            if self.enumeration_limit.is_some_and(|limit| enumerated >= limit) {
                truncated = true;
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        });

        if truncated {
            warn!(
                limit = enumerated,
                accepted = selected.len(),
                "simple-path enumeration truncated"
            );
        }
        debug!(enumerated, accepted = selected.len(), "dfs selection finished");

        collect_paths(farm, selected)
    }
}

/// Enumerate simple source→sink paths in discovery order.
///
/// `limit` caps the number of paths returned.
pub fn enumerate_simple_paths(
    farm:  &Farm,
    order: NeighborOrder,
    limit: Option<usize>,
) -> Vec<Path> {
    let mut out = Vec::new();
    for_each_simple_path(farm, order, |trail| {
        // A trail always holds at least source and sink, both distinct.
        if let Ok(path) = Path::new(trail.to_vec()) {
            out.push(path);
        }
        if limit.is_some_and(|l| out.len() >= l) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    out
}

// ── Enumeration internals ─────────────────────────────────────────────────────

/// Depth-first walk over all simple source→sink paths with an explicit stack.
///
/// `trail` is the current path and `cursor[d]` the next neighbor slot to try
/// at depth `d`.  `on_trail` mirrors `trail` for O(1) membership checks; it is
/// owned by this call, so the search is reentrant.  The sink is never pushed
/// as a frame, which lets several paths end there.
///
/// Visit order is that of a recursive DFS that appends the current room,
/// records the trail when it is the sink, and otherwise recurses into every
/// neighbor not already on the trail.
fn for_each_simple_path<F>(farm: &Farm, order: NeighborOrder, mut visit: F)
where
    F: FnMut(&[RoomId]) -> ControlFlow<()>,
{
    let mut on_trail = vec![false; farm.room_count()];
    let mut trail:  Vec<RoomId> = vec![farm.start];
    let mut cursor: Vec<usize>  = vec![0];
    on_trail[farm.start.index()] = true;

    while let Some(&room) = trail.last() {
        let depth     = trail.len() - 1;
        let neighbors = farm.neighbors(room, order);

        let Some(&next) = neighbors.get(cursor[depth]) else {
            // Exhausted: backtrack.
            on_trail[room.index()] = false;
            trail.pop();
            cursor.pop();
            continue;
        };
        cursor[depth] += 1;

        if on_trail[next.index()] {
            continue;
        }

        if next == farm.end {
            trail.push(next);
            let flow = visit(&trail);
            trail.pop();
            if flow.is_break() {
                return;
            }
            continue;
        }

        on_trail[next.index()] = true;
        trail.push(next);
        cursor.push(0);
    }
}
