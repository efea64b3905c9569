//! The `AntScheduler` seam and its greedy default.

use lemin_core::AntId;
use lemin_graph::PathSet;
use tracing::debug;

use crate::{Assignment, ScheduleError, ScheduleResult};

/// Pluggable ant-to-path distribution.
///
/// Implementations must place every ant `1..=ants` on exactly one path.
pub trait AntScheduler: Send + Sync {
    fn assign(&self, paths: &PathSet, ants: u32) -> ScheduleResult<Assignment>;
}

/// Online greedy balancing.
///
/// Ants are taken in id order; each goes to the path minimising
/// `rooms + ants already assigned`, ties to the lowest path index.  This is
/// the finishing tick of the ant plus two, so every ant individually gets the
/// earliest arrival still available.  Not proven optimal for every mix of
/// path lengths.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyScheduler;

impl AntScheduler for GreedyScheduler {
    fn assign(&self, paths: &PathSet, ants: u32) -> ScheduleResult<Assignment> {
        if paths.is_empty() {
            return Err(ScheduleError::NoPaths);
        }
        if ants == 0 {
            return Err(ScheduleError::NoAnts);
        }

        let lengths = paths.lengths();
        let mut assigned   = vec![0usize; lengths.len()];
        let mut assignment = Assignment::empty(lengths.len());

        for ant in AntId::range(ants) {
            let mut best = 0;
            for i in 1..lengths.len() {
                // Strict `<` keeps the lowest index on ties.
                if lengths[i] + assigned[i] < lengths[best] + assigned[best] {
                    best = i;
                }
            }
            assigned[best] += 1;
            assignment.push(best, ant);
        }

        debug!(
            ants,
            paths = lengths.len(),
            loads = ?assignment.loads(),
            makespan = assignment.makespan(paths),
            "ants assigned"
        );
        Ok(assignment)
    }
}
