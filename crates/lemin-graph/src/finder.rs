//! The `PathFinder` seam.
//!
//! `lemin-sim` calls path search through the [`PathFinder`] trait, so callers
//! can plug in a different disjoint-path algorithm (a true max-flow, say)
//! without touching the scheduler or the simulation.

use lemin_core::{RoomId, RunConfig, Strategy};
use tracing::debug;

use crate::{BfsPathFinder, DfsPathFinder, Farm, GraphError, GraphResult, Path, PathSet};

/// Pluggable vertex-disjoint path search.
///
/// # Contract
///
/// - Every returned path runs from `farm.start` to `farm.end`, visits no room
///   twice and holds at least two rooms.
/// - No two returned paths share a room other than the source and sink.
/// - When no source→sink path exists, return
///   [`GraphError::NoRoute`](crate::GraphError::NoRoute); never an empty set.
/// - The farm is read-only.  Implementations keep their visited/excluded
///   state locally, so repeated and concurrent calls are safe.
pub trait PathFinder: Send + Sync {
    /// Short name for logs (`"dfs"`, `"bfs"`, …).
    fn name(&self) -> &'static str;

    fn find_paths(&self, farm: &Farm) -> GraphResult<PathSet>;
}

/// The finder(s) a run configuration asks for, in evaluation order.
///
/// [`Strategy::Best`] yields both built-in finders; choosing between their
/// results is up to the caller.
pub fn finders_for(config: &RunConfig) -> Vec<Box<dyn PathFinder>> {
    let dfs = || -> Box<dyn PathFinder> {
        Box::new(DfsPathFinder {
            order:             config.neighbor_order,
            enumeration_limit: config.enumeration_limit,
        })
    };
    let bfs = || -> Box<dyn PathFinder> {
        Box::new(BfsPathFinder { order: config.neighbor_order })
    };

    match config.strategy {
        Strategy::Dfs  => vec![dfs()],
        Strategy::Bfs  => vec![bfs()],
        Strategy::Best => vec![dfs(), bfs()],
    }
}

/// Turn accepted room trails into a checked `PathSet`, or `NoRoute` when
/// nothing was accepted.
pub(crate) fn collect_paths(farm: &Farm, trails: Vec<Vec<RoomId>>) -> GraphResult<PathSet> {
    if trails.is_empty() {
        return Err(GraphError::NoRoute {
            start: farm.start_name().to_owned(),
            end:   farm.end_name().to_owned(),
        });
    }
    let paths = trails
        .into_iter()
        .map(Path::new)
        .collect::<GraphResult<Vec<_>>>()?;
    for (index, path) in paths.iter().enumerate() {
        debug!(index, rooms = path.len(), path = %path.describe(farm), "selected path");
    }
    PathSet::new(farm.start, farm.end, paths)
}
